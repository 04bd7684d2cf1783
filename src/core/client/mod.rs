//! Public client surface + builder.
//! Defaults (base URL, UA, page size) live in `constants`.

pub(crate) mod constants;

use crate::blocking::BlockingClient;
use crate::core::IntrinioError;
use crate::core::net;
use crate::core::pagination::{self, Paginated};
use crate::core::request::Endpoint;
use crate::core::response::ApiResponse;
use constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, USER_AGENT};
use futures::Stream;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Asynchronous client for the Intrinio REST API.
///
/// Cloning is cheap: the connection pool is shared between clones.
///
/// # Example
///
/// ```no_run
/// # use intrinio_rs::{IntrinioClient, securities::SecurityStockPrices, Frequency};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrinioClient::builder().api_key("my-key").build()?;
/// let prices = client
///     .send(&SecurityStockPrices::new("AAPL").frequency(Frequency::Weekly))
///     .await?;
/// println!("{} prices, more: {}", prices.stock_prices.len(), prices.next_page.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntrinioClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl IntrinioClient {
    /// Create a new builder.
    pub fn builder() -> IntrinioClientBuilder {
        IntrinioClientBuilder::default()
    }

    /// Builds a client from `INTRINIO_API_KEY` (required) and `INTRINIO_BASE_URL` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`IntrinioError::Config`] if the API key variable is unset, or a
    /// URL error if the base URL override does not parse.
    pub fn from_env() -> Result<Self, IntrinioError> {
        IntrinioClientBuilder::from_env()?.build()
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
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output, IntrinioError> {
        self.send_with_http_info(endpoint)
            .await
            .map(ApiResponse::into_data)
    }

    /// Executes an endpoint and returns its payload with status and headers.
    ///
    /// # Errors
    ///
    /// Same conditions as [`IntrinioClient::send`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn send_with_http_info<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<ApiResponse<E::Output>, IntrinioError> {
        let req = endpoint.request()?;
        net::execute(&self.http, &self.base_url, self.api_key.as_deref(), &req).await
    }

    /// Walks every page of a list endpoint, starting from `endpoint`'s own cursor.
    ///
    /// Each page's `next_page` is fed back unmodified. The stream ends after the
    /// last page, or right after yielding an error.
    pub fn pages<'a, E: Paginated + 'a>(
        &'a self,
        endpoint: E,
    ) -> impl Stream<Item = Result<E::Output, IntrinioError>> + 'a {
        futures::stream::unfold(Some(endpoint), move |state| async move {
            let current = state?;
            match self.send(&current).await {
                Ok(page) => {
                    let next = pagination::follow(&current, &page);
                    Some((Ok(page), next))
                }
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

/* ----------------------- Builder ----------------------- */

/// Configuration shared by the async and the blocking client.
#[derive(Debug, Default, Clone)]
pub struct IntrinioClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl IntrinioClientBuilder {
    /// Seeds a builder from the environment (see [`IntrinioClient::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns [`IntrinioError::Config`] when `INTRINIO_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self, IntrinioError> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| IntrinioError::Config(format!("{API_KEY_ENV} is not set")))?;
        let mut builder = Self::default().api_key(key);
        if let Ok(base) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(Url::parse(&base)?);
        }
        Ok(builder)
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base (e.g., `https://api-v2.intrinio.com/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    fn resolved_base(&self) -> Result<Url, IntrinioError> {
        match &self.base_url {
            Some(u) => Ok(u.clone()),
            None => Ok(Url::parse(DEFAULT_BASE_URL)?),
        }
    }

    fn resolved_key(&self) -> Option<String> {
        self.api_key.clone().filter(|k| !k.is_empty())
    }

    /// Builds the async client.
    ///
    /// # Errors
    ///
    /// Fails if the default base URL does not parse or reqwest cannot build its client.
    pub fn build(self) -> Result<IntrinioClient, IntrinioError> {
        let base_url = self.resolved_base()?;

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(IntrinioClient {
            http: httpb.build()?,
            base_url,
            api_key: self.resolved_key(),
        })
    }

    /// Builds the blocking counterpart with the same configuration.
    ///
    /// Must not be called from within an async runtime.
    pub fn build_blocking(self) -> Result<BlockingClient, IntrinioError> {
        let base_url = self.resolved_base()?;

        let mut httpb = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(BlockingClient::from_parts(
            httpb.build()?,
            base_url,
            self.resolved_key(),
        ))
    }
}
