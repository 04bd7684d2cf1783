use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every endpoint, whether executed through the async or the blocking client,
/// fails with this one type. Callers that need the cause can match on the
/// variant; callers that only need "the API call failed" can treat it opaquely.
#[derive(Debug, Error)]
pub enum IntrinioError {
    /// An error occurred during an HTTP request (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be deserialized into the expected model.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned a non-2xx HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error (with the API key redacted).
        url: String,
        /// The raw response body, usually a JSON error message from the service.
        body: String,
    },

    /// A request parameter was rejected before any network I/O took place.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The client could not be configured (missing API key variable, bad base URL, ...).
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntrinioError {
    /// The HTTP status code carried by this error, if the failure came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the service rejected the request with 404 (unknown identifier or tag).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
