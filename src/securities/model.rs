use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::models::{SecuritySummary, StockPriceAdjustmentSummary, StockPriceSummary};
use crate::core::pagination::impl_page;

/// Full security record returned by the lookup-by-identifier endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    pub id: String,
    pub company_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub security_type: Option<String>,
    pub code: Option<String>,
    pub share_class: Option<String>,
    pub currency: Option<String>,
    pub round_lot_size: Option<Decimal>,
    pub ticker: Option<String>,
    pub exchange_ticker: Option<String>,
    pub composite_ticker: Option<String>,
    #[serde(default)]
    pub alternate_tickers: Vec<String>,
    pub figi: Option<String>,
    pub cik: Option<String>,
    pub composite_figi: Option<String>,
    pub share_class_figi: Option<String>,
    pub figi_uniqueid: Option<String>,
    pub active: Option<bool>,
    pub etf: Option<bool>,
    pub delisted: Option<bool>,
    pub primary_listing: Option<bool>,
    pub primary_security: Option<bool>,
    pub first_stock_price: Option<NaiveDate>,
    pub last_stock_price: Option<NaiveDate>,
    pub last_stock_price_adjustment: Option<NaiveDate>,
    pub last_corporate_action: Option<NaiveDate>,
    #[serde(default)]
    pub previous_tickers: Vec<String>,
    pub listing_exchange_mic: Option<String>,
}

/// A page of securities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSecurities {
    #[serde(default)]
    pub securities: Vec<SecuritySummary>,
    pub next_page: Option<String>,
}

/// Results of a free-text security search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSecuritiesSearch {
    #[serde(default)]
    pub securities: Vec<SecuritySummary>,
}

/// One observation of a data tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    pub date: NaiveDate,
    pub value: Option<Decimal>,
}

/// A page of a data tag's history for one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSecurityHistoricalData {
    #[serde(default)]
    pub historical_data: Vec<HistoricalData>,
    pub security: Option<SecuritySummary>,
    pub next_page: Option<String>,
}

/// A page of end-of-period prices for one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSecurityStockPrices {
    #[serde(default)]
    pub stock_prices: Vec<StockPriceSummary>,
    pub security: Option<SecuritySummary>,
    pub next_page: Option<String>,
}

/// A page of split/dividend adjustments for one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSecurityStockPriceAdjustments {
    #[serde(default)]
    pub stock_price_adjustments: Vec<StockPriceAdjustmentSummary>,
    pub security: Option<SecuritySummary>,
    pub next_page: Option<String>,
}

/// One intraday trade/quote snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradayStockPrice {
    pub time: DateTime<Utc>,
    pub last_price: Option<Decimal>,
    pub ask_price: Option<Decimal>,
    pub ask_size: Option<Decimal>,
    pub bid_price: Option<Decimal>,
    pub bid_size: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub source: Option<String>,
}

/// A page of intraday prices for one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSecurityIntradayPrices {
    #[serde(default)]
    pub intraday_prices: Vec<IntradayStockPrice>,
    pub security: Option<SecuritySummary>,
    pub source: Option<String>,
    pub next_page: Option<String>,
}

/// The most recent dividend announced for a security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendRecord {
    pub ticker: Option<String>,
    pub company_name: Option<String>,
    pub exchange_mic: Option<String>,
    pub dividend_amount: Option<Decimal>,
    pub dividend_currency: Option<String>,
    pub announcement_date: Option<NaiveDate>,
    pub record_date: Option<NaiveDate>,
    pub ex_dividend_date: Option<NaiveDate>,
    pub pay_date: Option<NaiveDate>,
    pub frequency: Option<String>,
    pub status: Option<String>,
    pub dividend_yield: Option<Decimal>,
    pub updated_on: Option<DateTime<Utc>>,
}

/// The most recent earnings release for a security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsRecord {
    pub quarter: Option<String>,
    pub time_of_day: Option<String>,
    pub earnings_date: Option<NaiveDate>,
    pub broadcast_url: Option<String>,
    pub transcript_url: Option<String>,
    pub preliminary_earnings_url: Option<String>,
    pub earnings_url: Option<String>,
    pub next_earnings_date: Option<NaiveDate>,
    pub next_earnings_fiscal_year: Option<i32>,
    pub next_earnings_quarter: Option<String>,
    pub status: Option<String>,
}

/// One matched tag value in a screen result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenResultData {
    pub tag: String,
    pub number_value: Option<Decimal>,
    pub text_value: Option<String>,
}

/// A security matching a screen, with the values of the screened tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScreenResult {
    pub security: SecuritySummary,
    #[serde(default)]
    pub data: Vec<ScreenResultData>,
}

impl SecurityScreenResult {
    /// The numeric value reported for `tag`, if present.
    pub fn number(&self, tag: &str) -> Option<Decimal> {
        self.data
            .iter()
            .find(|d| d.tag == tag)
            .and_then(|d| d.number_value)
    }
}

impl_page!(
    ApiSecurities,
    ApiSecurityHistoricalData,
    ApiSecurityStockPrices,
    ApiSecurityStockPriceAdjustments,
    ApiSecurityIntradayPrices,
);
