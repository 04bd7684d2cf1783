//! Blocking (synchronous) client.
//!
//! Executes the same [`Endpoint`] requests as [`IntrinioClient`](crate::IntrinioClient)
//! on `reqwest`'s blocking transport. Parameters, defaults and decoding are shared,
//! so a request issued here is byte-for-byte the request the async client issues.
//!
//! Like `reqwest::blocking`, this client must not be created or used inside an
//! async runtime.

use url::Url;

use crate::core::client::IntrinioClientBuilder;
use crate::core::pagination::{self, Paginated};
use crate::core::request::Endpoint;
use crate::core::response::{ApiResponse, decode};
use crate::core::IntrinioError;

/// Synchronous client for the Intrinio REST API.
///
/// ```no_run
/// # use intrinio_rs::{blocking::BlockingClient, stock_exchanges::AllStockExchanges};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BlockingClient::builder().api_key("my-key").build_blocking()?;
/// let exchanges = client.send(&AllStockExchanges::new().country_code("US"))?;
/// println!("{} exchanges", exchanges.stock_exchanges.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlockingClient {
    http: reqwest::blocking::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl BlockingClient {
    /// Create a new builder; finish it with [`IntrinioClientBuilder::build_blocking`].
    pub fn builder() -> IntrinioClientBuilder {
        IntrinioClientBuilder::default()
    }

    /// Blocking counterpart of [`IntrinioClient::from_env`](crate::IntrinioClient::from_env).
    ///
    /// # Errors
    ///
    /// Returns [`IntrinioError::Config`] if `INTRINIO_API_KEY` is unset.
    pub fn from_env() -> Result<Self, IntrinioError> {
        IntrinioClientBuilder::from_env()?.build_blocking()
    }

    pub(crate) fn from_parts(
        http: reqwest::blocking::Client,
        base_url: Url,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Executes an endpoint and returns its payload.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status or undecodable body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub fn send<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output, IntrinioError> {
        self.send_with_http_info(endpoint).map(ApiResponse::into_data)
    }

    /// Executes an endpoint and returns its payload with status and headers.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BlockingClient::send`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub fn send_with_http_info<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<ApiResponse<E::Output>, IntrinioError> {
        let req = endpoint.request()?;
        let url = req.url(&self.base_url, self.api_key.as_deref())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(method = %req.method(), url = %crate::core::request::redact(&url), "sending blocking request");

        let mut builder = self.http.request(req.method().clone(), url.clone());
        if let Some(body) = req.body() {
            builder = builder.json(body);
        }

        let resp = builder.send()?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text()?;

        decode(status, headers, &url, &body)
    }

    /// Iterates every page of a list endpoint; see [`IntrinioClient::pages`](crate::IntrinioClient::pages).
    pub fn pages<'a, E: Paginated + 'a>(
        &'a self,
        endpoint: E,
    ) -> impl Iterator<Item = Result<E::Output, IntrinioError>> + 'a {
        let mut state = Some(endpoint);
        std::iter::from_fn(move || {
            let current = state.take()?;
            match self.send(&current) {
                Ok(page) => {
                    state = pagination::follow(&current, &page);
                    Some(Ok(page))
                }
                Err(e) => Some(Err(e)),
            }
        })
    }
}
