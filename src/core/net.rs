use serde::de::DeserializeOwned;
use url::Url;

use crate::core::request::ApiRequest;
use crate::core::response::{ApiResponse, decode};
use crate::core::IntrinioError;

/// Executes a request on the async transport and decodes the body.
pub(crate) async fn execute<T: DeserializeOwned>(
    http: &reqwest::Client,
    base: &Url,
    api_key: Option<&str>,
    req: &ApiRequest,
) -> Result<ApiResponse<T>, IntrinioError> {
    let url = req.url(base, api_key)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(method = %req.method(), url = %crate::core::request::redact(&url), "sending request");

    let mut builder = http.request(req.method().clone(), url.clone());
    if let Some(body) = req.body() {
        builder = builder.json(body);
    }

    let resp = builder.send().await?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

    decode(status, headers, &url, &body)
}
