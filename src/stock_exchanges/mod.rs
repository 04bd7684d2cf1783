//! Stock exchanges and exchange-wide price listings, keyed by MIC.

mod api;
mod model;

pub use api::{
    AllStockExchanges, StockExchangeById, StockExchangePriceAdjustments, StockExchangePrices,
    StockExchangeRealtimePrices, StockExchangeSecurities,
};
pub use model::{
    ApiStockExchangeRealtimeStockPrices, ApiStockExchangeSecurities,
    ApiStockExchangeStockPriceAdjustments, ApiStockExchangeStockPrices, ApiStockExchanges,
};
