use chrono::NaiveDate;

use crate::core::client::constants::DEFAULT_PAGE_SIZE;
use crate::core::models::{RealtimeSource, StockExchange};
use crate::core::pagination::impl_paginated;
use crate::core::request::{ApiRequest, Endpoint, require_segment};
use crate::core::IntrinioError;
use crate::stock_exchanges::model::{
    ApiStockExchangeRealtimeStockPrices, ApiStockExchangeSecurities,
    ApiStockExchangeStockPriceAdjustments, ApiStockExchangeStockPrices, ApiStockExchanges,
};

const STOCK_EXCHANGES: &str = "stock_exchanges";

/// `GET /stock_exchanges`: every exchange matching the location filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllStockExchanges {
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub page_size: u32,
}

impl Default for AllStockExchanges {
    fn default() -> Self {
        Self {
            city: None,
            country: None,
            country_code: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AllStockExchanges {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// ISO 3166 alpha-2 code, e.g. `US`.
    #[must_use]
    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }
}

impl Endpoint for AllStockExchanges {
    type Output = ApiStockExchanges;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        Ok(ApiRequest::get([STOCK_EXCHANGES])
            .query_opt("city", self.city.as_deref())
            .query_opt("country", self.country.as_deref())
            .query_opt("country_code", self.country_code.as_deref())
            .query("page_size", self.page_size))
    }
}

/// `GET /stock_exchanges/{identifier}`. The identifier is a MIC or Intrinio ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockExchangeById {
    pub identifier: String,
}

impl StockExchangeById {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Endpoint for StockExchangeById {
    type Output = StockExchange;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([STOCK_EXCHANGES, id]))
    }
}

/// `GET /stock_exchanges/{identifier}/prices`: one day's prices for the whole exchange.
///
/// Without a `date` the service returns the latest trading day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockExchangePrices {
    pub identifier: String,
    pub date: Option<NaiveDate>,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl StockExchangePrices {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            date: None,
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    #[must_use]
    pub fn next_page(mut self, cursor: impl Into<String>) -> Self {
        self.next_page = Some(cursor.into());
        self
    }
}

impl Endpoint for StockExchangePrices {
    type Output = ApiStockExchangeStockPrices;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([STOCK_EXCHANGES, id, "prices"])
            .query_opt("date", self.date)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/// `GET /stock_exchanges/{identifier}/prices/adjustments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockExchangePriceAdjustments {
    pub identifier: String,
    pub date: Option<NaiveDate>,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl StockExchangePriceAdjustments {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            date: None,
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    #[must_use]
    pub fn next_page(mut self, cursor: impl Into<String>) -> Self {
        self.next_page = Some(cursor.into());
        self
    }
}

impl Endpoint for StockExchangePriceAdjustments {
    type Output = ApiStockExchangeStockPriceAdjustments;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([STOCK_EXCHANGES, id, "prices", "adjustments"])
            .query_opt("date", self.date)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/// `GET /stock_exchanges/{identifier}/prices/realtime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockExchangeRealtimePrices {
    pub identifier: String,
    pub source: Option<RealtimeSource>,
    /// Skip securities that are no longer active.
    pub active_only: Option<bool>,
    /// Skip securities without a trade today.
    pub traded_only: Option<bool>,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl StockExchangeRealtimePrices {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            source: None,
            active_only: None,
            traded_only: None,
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }

    #[must_use]
    pub const fn source(mut self, source: RealtimeSource) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub const fn active_only(mut self, yes: bool) -> Self {
        self.active_only = Some(yes);
        self
    }

    #[must_use]
    pub const fn traded_only(mut self, yes: bool) -> Self {
        self.traded_only = Some(yes);
        self
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    #[must_use]
    pub fn next_page(mut self, cursor: impl Into<String>) -> Self {
        self.next_page = Some(cursor.into());
        self
    }
}

impl Endpoint for StockExchangeRealtimePrices {
    type Output = ApiStockExchangeRealtimeStockPrices;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([STOCK_EXCHANGES, id, "prices", "realtime"])
            .query_opt("source", self.source)
            .query_opt("active_only", self.active_only)
            .query_opt("traded_only", self.traded_only)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/// `GET /stock_exchanges/{identifier}/securities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockExchangeSecurities {
    pub identifier: String,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl StockExchangeSecurities {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    #[must_use]
    pub fn next_page(mut self, cursor: impl Into<String>) -> Self {
        self.next_page = Some(cursor.into());
        self
    }
}

impl Endpoint for StockExchangeSecurities {
    type Output = ApiStockExchangeSecurities;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([STOCK_EXCHANGES, id, "securities"])
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

impl_paginated!(
    StockExchangePrices,
    StockExchangePriceAdjustments,
    StockExchangeRealtimePrices,
    StockExchangeSecurities,
);
