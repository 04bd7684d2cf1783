use serde::{Deserialize, Serialize};

use crate::core::models::{
    RealtimeStockPrice, SecuritySummary, StockExchange, StockPriceAdjustmentSummary,
    StockPriceSummary,
};
use crate::core::pagination::impl_page;

/// All exchanges matching the filters (not paged).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStockExchanges {
    #[serde(default)]
    pub stock_exchanges: Vec<StockExchange>,
}

/// A page of one day's prices for every security on an exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStockExchangeStockPrices {
    #[serde(default)]
    pub stock_prices: Vec<StockPriceSummary>,
    pub stock_exchange: Option<StockExchange>,
    pub next_page: Option<String>,
}

/// A page of one day's adjustments for securities on an exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStockExchangeStockPriceAdjustments {
    #[serde(default)]
    pub stock_price_adjustments: Vec<StockPriceAdjustmentSummary>,
    pub stock_exchange: Option<StockExchange>,
    pub next_page: Option<String>,
}

/// A page of realtime prices for securities on an exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStockExchangeRealtimeStockPrices {
    #[serde(default)]
    pub stock_prices: Vec<RealtimeStockPrice>,
    pub stock_exchange: Option<StockExchange>,
    pub next_page: Option<String>,
}

/// A page of securities listed on an exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStockExchangeSecurities {
    #[serde(default)]
    pub securities: Vec<SecuritySummary>,
    pub stock_exchange: Option<StockExchange>,
    pub next_page: Option<String>,
}

impl_page!(
    ApiStockExchangeStockPrices,
    ApiStockExchangeStockPriceAdjustments,
    ApiStockExchangeRealtimeStockPrices,
    ApiStockExchangeSecurities,
);
