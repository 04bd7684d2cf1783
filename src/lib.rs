//! intrinio-rs: typed client for the Intrinio financial-data REST API.
//!
//! Every endpoint is a plain request value implementing [`Endpoint`]. Run it with
//! the async [`IntrinioClient`] or the [`blocking::BlockingClient`], and pick
//! `send` for the payload or `send_with_http_info` for payload plus status and
//! headers:
//!
//! ```no_run
//! # use intrinio_rs::{IntrinioClient, securities::SecurityStockPrices};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IntrinioClient::from_env()?;
//! let req = SecurityStockPrices::new("AAPL").page_size(10);
//!
//! let prices = client.send(&req).await?;
//! let with_info = client.send_with_http_info(&req).await?;
//! assert_eq!(with_info.data, prices);
//! println!("status {}", with_info.status);
//! # Ok(())
//! # }
//! ```
//!
//! Resource groups: [`securities`], [`stock_exchanges`], [`technicals`] and
//! [`bulk_downloads`]. List endpoints are cursor-paged; see [`IntrinioClient::pages`].

pub mod blocking;
pub mod bulk_downloads;
pub mod core;
pub mod securities;
pub mod stock_exchanges;
pub mod technicals;

pub use blocking::BlockingClient;
pub use crate::core::client::constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_PAGE_SIZE};
pub use crate::core::{
    ApiRequest, ApiResponse, Endpoint, Frequency, IntrinioClient, IntrinioClientBuilder,
    IntrinioError, Page, Paginated, PriceKey, RealtimeSource, RealtimeStockPrice,
    SecuritySummary, SortOrder, StockExchange, StockPriceAdjustmentSummary, StockPriceSummary,
};

#[cfg(feature = "tracing-subscriber")]
/// Installs a `tracing` subscriber honoring `RUST_LOG` (demos and tests only).
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
