//! Securities: lookups, prices, data tags, search and screening.
//!
//! Each request type implements [`Endpoint`](crate::Endpoint) and is executed with
//! [`IntrinioClient::send`](crate::IntrinioClient::send) or the blocking client.
//!
//! ```no_run
//! # use intrinio_rs::IntrinioClient;
//! # use intrinio_rs::securities::{ScreenSecurities, ScreenGroup, ClauseOperator};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IntrinioClient::from_env()?;
//! let logic = ScreenGroup::all()
//!     .clause("marketcap", ClauseOperator::Gt, 1_000_000_000)
//!     .clause("pricetoearnings", ClauseOperator::Lt, 15);
//! let hits = client.send(&ScreenSecurities::new(logic).order_column("marketcap")).await?;
//! for hit in hits {
//!     println!("{:?} {:?}", hit.security.ticker, hit.number("marketcap"));
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod model;
mod screen;

pub use api::{
    AllSecurities, ScreenSecurities, SearchSecurities, SecurityById, SecurityDataPointNumber,
    SecurityDataPointText, SecurityHistoricalData, SecurityIntradayPrices,
    SecurityLatestDividendRecord, SecurityLatestEarningsRecord, SecurityRealtimePrice,
    SecurityStockPriceAdjustments, SecurityStockPrices,
};
pub use model::{
    ApiSecurities, ApiSecuritiesSearch, ApiSecurityHistoricalData, ApiSecurityIntradayPrices,
    ApiSecurityStockPriceAdjustments, ApiSecurityStockPrices, DividendRecord, EarningsRecord,
    HistoricalData, IntradayStockPrice, ScreenResultData, Security, SecurityScreenResult,
};
pub use screen::{ClauseOperator, LogicOperator, ScreenClause, ScreenGroup};
