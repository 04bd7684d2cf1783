//! Centralized constants for default endpoints and UA.

/// Default UA identifying this crate.
pub(crate) const USER_AGENT: &str = concat!("intrinio-rs/", env!("CARGO_PKG_VERSION"));

/// Intrinio API v2 base (resource paths are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api-v2.intrinio.com/";

/// Environment variable holding the API key for [`super::IntrinioClient::from_env`].
pub const API_KEY_ENV: &str = "INTRINIO_API_KEY";

/// Optional environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "INTRINIO_BASE_URL";

/// Page size applied by every list endpoint when the caller sets none.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
