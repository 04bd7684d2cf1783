use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::IntrinioError;
use crate::core::request::redact;

/// A deserialized payload together with the HTTP metadata of the response.
///
/// Returned by the `send_with_http_info` family. `data` is exactly what the
/// plain `send` would have returned for the same request.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The numeric HTTP status code (always 2xx; failures are errors).
    pub status: u16,
    /// The response headers as returned by the server.
    pub headers: HeaderMap,
    /// The deserialized response body.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Discards the HTTP metadata.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Looks up a response header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Maps the payload, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }
}

/// Turns a finished exchange into a typed payload or an error.
///
/// Shared by both transports so status handling and decoding cannot drift apart.
pub(crate) fn decode<T: DeserializeOwned>(
    status: StatusCode,
    headers: HeaderMap,
    url: &Url,
    body: &str,
) -> Result<ApiResponse<T>, IntrinioError> {
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::warn!(status = status.as_u16(), url = %redact(url), "non-success response");
        return Err(IntrinioError::Status {
            status: status.as_u16(),
            url: redact(url),
            body: body.to_string(),
        });
    }

    let data = serde_json::from_str(body)?;
    Ok(ApiResponse {
        status: status.as_u16(),
        headers,
        data,
    })
}
