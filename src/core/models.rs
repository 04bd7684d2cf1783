//! Records and parameter enums shared across resource groups.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/* ---------------- Parameter enums ---------------- */

/// Sampling frequency for price and historical data series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction of a series or screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which price field an indicator is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceKey {
    Open,
    High,
    Low,
    #[default]
    Close,
    Volume,
}

impl PriceKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feed a realtime or intraday price is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealtimeSource {
    Iex,
    Bats,
    BatsDelayed,
    UtpDelayed,
    CtaADelayed,
    CtaBDelayed,
    OtcDelayed,
    DelayedSip,
    NasdaqBasic,
    IntrinioMx,
    IntrinioMxPlus,
    CboeOne,
}

impl RealtimeSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iex => "iex",
            Self::Bats => "bats",
            Self::BatsDelayed => "bats_delayed",
            Self::UtpDelayed => "utp_delayed",
            Self::CtaADelayed => "cta_a_delayed",
            Self::CtaBDelayed => "cta_b_delayed",
            Self::OtcDelayed => "otc_delayed",
            Self::DelayedSip => "delayed_sip",
            Self::NasdaqBasic => "nasdaq_basic",
            Self::IntrinioMx => "intrinio_mx",
            Self::IntrinioMxPlus => "intrinio_mx_plus",
            Self::CboeOne => "cboe_one",
        }
    }
}

impl fmt::Display for RealtimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------------- Shared records ---------------- */

/// The compact security representation embedded in most responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySummary {
    /// The Intrinio ID of the security.
    pub id: String,
    pub company_id: Option<String>,
    pub stock_exchange_id: Option<String>,
    pub exchange: Option<String>,
    pub exchange_mic: Option<String>,
    pub name: Option<String>,
    /// Security type code (e.g. `EQS` for common stock).
    pub code: Option<String>,
    pub currency: Option<String>,
    pub ticker: Option<String>,
    pub composite_ticker: Option<String>,
    pub figi: Option<String>,
    pub composite_figi: Option<String>,
    pub share_class_figi: Option<String>,
    pub primary_listing: Option<bool>,
}

/// A stock exchange, identified by its MIC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockExchange {
    pub id: String,
    pub name: Option<String>,
    /// Market Identification Code.
    pub mic: Option<String>,
    pub acronym: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub website: Option<String>,
    pub first_stock_price_date: Option<NaiveDate>,
    pub last_stock_price_date: Option<NaiveDate>,
}

/// One end-of-period price bar, with split/dividend adjusted counterparts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPriceSummary {
    pub date: NaiveDate,
    /// True when the period has not closed yet.
    pub intraperiod: Option<bool>,
    pub frequency: Option<String>,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub close: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub adj_open: Option<Decimal>,
    pub adj_high: Option<Decimal>,
    pub adj_low: Option<Decimal>,
    pub adj_close: Option<Decimal>,
    pub adj_volume: Option<Decimal>,
    pub factor: Option<Decimal>,
    pub split_ratio: Option<Decimal>,
    pub dividend: Option<Decimal>,
    pub change: Option<Decimal>,
    pub percent_change: Option<Decimal>,
    pub fifty_two_week_high: Option<Decimal>,
    pub fifty_two_week_low: Option<Decimal>,
    /// Present on exchange-wide listings, absent on per-security ones.
    pub security: Option<SecuritySummary>,
}

/// A split or dividend adjustment applied on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPriceAdjustmentSummary {
    pub date: NaiveDate,
    pub factor: Option<Decimal>,
    pub dividend: Option<Decimal>,
    pub dividend_currency: Option<String>,
    pub split_ratio: Option<Decimal>,
    pub security: Option<SecuritySummary>,
}

/// The latest trade and top-of-book for a security from a realtime feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeStockPrice {
    pub last_price: Option<Decimal>,
    pub last_time: Option<DateTime<Utc>>,
    pub last_size: Option<Decimal>,
    pub bid_price: Option<Decimal>,
    pub bid_size: Option<Decimal>,
    pub ask_price: Option<Decimal>,
    pub ask_size: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub close_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub exchange_volume: Option<Decimal>,
    pub market_volume: Option<Decimal>,
    pub updated_on: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub listing_venue: Option<String>,
    pub sales_conditions: Option<String>,
    pub quote_conditions: Option<String>,
    pub market_center_code: Option<String>,
    pub is_darkpool: Option<bool>,
    pub security: Option<SecuritySummary>,
}

/// Accepts a JSON string or number and keeps its textual form.
pub(crate) fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(de)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
