use chrono::NaiveDate;

use crate::core::client::constants::DEFAULT_PAGE_SIZE;
use crate::core::models::{Frequency, RealtimeStockPrice, RealtimeSource, SortOrder};
use crate::core::pagination::impl_paginated;
use crate::core::request::{ApiRequest, Endpoint, require, require_segment};
use crate::core::IntrinioError;
use crate::securities::model::{
    ApiSecurities, ApiSecuritiesSearch, ApiSecurityHistoricalData, ApiSecurityIntradayPrices,
    ApiSecurityStockPriceAdjustments, ApiSecurityStockPrices, DividendRecord, EarningsRecord,
    Security, SecurityScreenResult,
};
use crate::securities::screen::ScreenGroup;
use rust_decimal::Decimal;

const SECURITIES: &str = "securities";

/* ---------------- Listing ---------------- */

/// `GET /securities`: every security matching the filters.
///
/// Filters left unset are not sent. `page_size` defaults to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct AllSecurities {
    pub active: Option<bool>,
    pub delisted: Option<bool>,
    pub code: Option<String>,
    pub currency: Option<String>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub composite_mic: Option<String>,
    pub exchange_mic: Option<String>,
    pub stock_prices_after: Option<NaiveDate>,
    pub stock_prices_before: Option<NaiveDate>,
    pub cik: Option<String>,
    pub figi: Option<String>,
    pub composite_figi: Option<String>,
    pub share_class_figi: Option<String>,
    pub figi_unique_id: Option<String>,
    pub include_non_figi: Option<bool>,
    pub primary_listing: Option<bool>,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl Default for AllSecurities {
    fn default() -> Self {
        Self {
            active: None,
            delisted: None,
            code: None,
            currency: None,
            ticker: None,
            name: None,
            composite_mic: None,
            exchange_mic: None,
            stock_prices_after: None,
            stock_prices_before: None,
            cik: None,
            figi: None,
            composite_figi: None,
            share_class_figi: None,
            figi_unique_id: None,
            include_non_figi: None,
            primary_listing: None,
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }
}

impl AllSecurities {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active(mut self, yes: bool) -> Self {
        self.active = Some(yes);
        self
    }

    #[must_use]
    pub const fn delisted(mut self, yes: bool) -> Self {
        self.delisted = Some(yes);
        self
    }

    /// Security type code, e.g. `EQS`.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn composite_mic(mut self, mic: impl Into<String>) -> Self {
        self.composite_mic = Some(mic.into());
        self
    }

    #[must_use]
    pub fn exchange_mic(mut self, mic: impl Into<String>) -> Self {
        self.exchange_mic = Some(mic.into());
        self
    }

    /// Only securities with prices after this date.
    #[must_use]
    pub const fn stock_prices_after(mut self, date: NaiveDate) -> Self {
        self.stock_prices_after = Some(date);
        self
    }

    /// Only securities with prices before this date.
    #[must_use]
    pub const fn stock_prices_before(mut self, date: NaiveDate) -> Self {
        self.stock_prices_before = Some(date);
        self
    }

    #[must_use]
    pub fn cik(mut self, cik: impl Into<String>) -> Self {
        self.cik = Some(cik.into());
        self
    }

    #[must_use]
    pub fn figi(mut self, figi: impl Into<String>) -> Self {
        self.figi = Some(figi.into());
        self
    }

    #[must_use]
    pub fn composite_figi(mut self, figi: impl Into<String>) -> Self {
        self.composite_figi = Some(figi.into());
        self
    }

    #[must_use]
    pub fn share_class_figi(mut self, figi: impl Into<String>) -> Self {
        self.share_class_figi = Some(figi.into());
        self
    }

    #[must_use]
    pub fn figi_unique_id(mut self, id: impl Into<String>) -> Self {
        self.figi_unique_id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn include_non_figi(mut self, yes: bool) -> Self {
        self.include_non_figi = Some(yes);
        self
    }

    #[must_use]
    pub const fn primary_listing(mut self, yes: bool) -> Self {
        self.primary_listing = Some(yes);
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

impl Endpoint for AllSecurities {
    type Output = ApiSecurities;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        Ok(ApiRequest::get([SECURITIES])
            .query_opt("active", self.active)
            .query_opt("delisted", self.delisted)
            .query_opt("code", self.code.as_deref())
            .query_opt("currency", self.currency.as_deref())
            .query_opt("ticker", self.ticker.as_deref())
            .query_opt("name", self.name.as_deref())
            .query_opt("composite_mic", self.composite_mic.as_deref())
            .query_opt("exchange_mic", self.exchange_mic.as_deref())
            .query_opt("stock_prices_after", self.stock_prices_after)
            .query_opt("stock_prices_before", self.stock_prices_before)
            .query_opt("cik", self.cik.as_deref())
            .query_opt("figi", self.figi.as_deref())
            .query_opt("composite_figi", self.composite_figi.as_deref())
            .query_opt("share_class_figi", self.share_class_figi.as_deref())
            .query_opt("figi_unique_id", self.figi_unique_id.as_deref())
            .query_opt("include_non_figi", self.include_non_figi)
            .query_opt("primary_listing", self.primary_listing)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/* ---------------- Single security lookups ---------------- */

/// `GET /securities/{identifier}`. The identifier may be a ticker, FIGI or Intrinio ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityById {
    pub identifier: String,
}

impl SecurityById {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Endpoint for SecurityById {
    type Output = Security;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([SECURITIES, id]))
    }
}

/// `GET /securities/{identifier}/data_point/{tag}/number`: the latest numeric value of a data tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityDataPointNumber {
    pub identifier: String,
    pub tag: String,
}

impl SecurityDataPointNumber {
    pub fn new(identifier: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            tag: tag.into(),
        }
    }
}

impl Endpoint for SecurityDataPointNumber {
    type Output = Decimal;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        let tag = require_segment("tag", &self.tag)?;
        Ok(ApiRequest::get([SECURITIES, id, "data_point", tag, "number"]))
    }
}

/// `GET /securities/{identifier}/data_point/{tag}/text`: the latest text value of a data tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityDataPointText {
    pub identifier: String,
    pub tag: String,
}

impl SecurityDataPointText {
    pub fn new(identifier: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            tag: tag.into(),
        }
    }
}

impl Endpoint for SecurityDataPointText {
    type Output = String;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        let tag = require_segment("tag", &self.tag)?;
        Ok(ApiRequest::get([SECURITIES, id, "data_point", tag, "text"]))
    }
}

/// `GET /securities/{identifier}/dividends/latest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityLatestDividendRecord {
    pub identifier: String,
}

impl SecurityLatestDividendRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Endpoint for SecurityLatestDividendRecord {
    type Output = DividendRecord;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([SECURITIES, id, "dividends", "latest"]))
    }
}

/// `GET /securities/{identifier}/earnings/latest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityLatestEarningsRecord {
    pub identifier: String,
}

impl SecurityLatestEarningsRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Endpoint for SecurityLatestEarningsRecord {
    type Output = EarningsRecord;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([SECURITIES, id, "earnings", "latest"]))
    }
}

/* ---------------- Series ---------------- */

/// `GET /securities/{identifier}/historical_data/{tag}`: the history of a data tag.
///
/// Sends `frequency=daily`, `sort_order=desc` and `page_size=100` unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityHistoricalData {
    pub identifier: String,
    pub tag: String,
    pub frequency: Frequency,
    /// Period type filter such as `FY`, `QTR`, `TTM` or `YTD`.
    pub period_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_order: SortOrder,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl SecurityHistoricalData {
    pub fn new(identifier: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            tag: tag.into(),
            frequency: Frequency::default(),
            period_type: None,
            start_date: None,
            end_date: None,
            sort_order: SortOrder::Desc,
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }

    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    #[must_use]
    pub fn period_type(mut self, period_type: impl Into<String>) -> Self {
        self.period_type = Some(period_type.into());
        self
    }

    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    #[must_use]
    pub const fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
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

impl Endpoint for SecurityHistoricalData {
    type Output = ApiSecurityHistoricalData;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        let tag = require_segment("tag", &self.tag)?;
        Ok(ApiRequest::get([SECURITIES, id, "historical_data", tag])
            .query("frequency", self.frequency)
            .query_opt("type", self.period_type.as_deref())
            .query_opt("start_date", self.start_date)
            .query_opt("end_date", self.end_date)
            .query("sort_order", self.sort_order)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/// `GET /securities/{identifier}/prices`: end-of-period stock prices.
///
/// Sends `frequency=daily` and `page_size=100` unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityStockPrices {
    pub identifier: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub frequency: Frequency,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl SecurityStockPrices {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            start_date: None,
            end_date: None,
            frequency: Frequency::default(),
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }

    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
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

impl Endpoint for SecurityStockPrices {
    type Output = ApiSecurityStockPrices;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([SECURITIES, id, "prices"])
            .query_opt("start_date", self.start_date)
            .query_opt("end_date", self.end_date)
            .query("frequency", self.frequency)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/// `GET /securities/{identifier}/prices/adjustments`: split and dividend adjustments.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityStockPriceAdjustments {
    pub identifier: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl SecurityStockPriceAdjustments {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            start_date: None,
            end_date: None,
            page_size: DEFAULT_PAGE_SIZE,
            next_page: None,
        }
    }

    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
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

impl Endpoint for SecurityStockPriceAdjustments {
    type Output = ApiSecurityStockPriceAdjustments;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([SECURITIES, id, "prices", "adjustments"])
            .query_opt("start_date", self.start_date)
            .query_opt("end_date", self.end_date)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/// `GET /securities/{identifier}/prices/realtime`: latest trade and quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityRealtimePrice {
    pub identifier: String,
    pub source: Option<RealtimeSource>,
}

impl SecurityRealtimePrice {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            source: None,
        }
    }

    #[must_use]
    pub const fn source(mut self, source: RealtimeSource) -> Self {
        self.source = Some(source);
        self
    }
}

impl Endpoint for SecurityRealtimePrice {
    type Output = RealtimeStockPrice;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([SECURITIES, id, "prices", "realtime"]).query_opt("source", self.source))
    }
}

/// `GET /securities/{identifier}/prices/intraday`: intraday snapshots.
///
/// `start_time`/`end_time` are passed through as given (service format `HH:MM:SS`).
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityIntradayPrices {
    pub identifier: String,
    pub source: Option<RealtimeSource>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<String>,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl SecurityIntradayPrices {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            source: None,
            start_date: None,
            start_time: None,
            end_date: None,
            end_time: None,
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
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn start_time(mut self, time: impl Into<String>) -> Self {
        self.start_time = Some(time.into());
        self
    }

    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    #[must_use]
    pub fn end_time(mut self, time: impl Into<String>) -> Self {
        self.end_time = Some(time.into());
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

impl Endpoint for SecurityIntradayPrices {
    type Output = ApiSecurityIntradayPrices;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        Ok(ApiRequest::get([SECURITIES, id, "prices", "intraday"])
            .query_opt("source", self.source)
            .query_opt("start_date", self.start_date)
            .query_opt("start_time", self.start_time.as_deref())
            .query_opt("end_date", self.end_date)
            .query_opt("end_time", self.end_time.as_deref())
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

/* ---------------- Search & screen ---------------- */

/// `GET /securities/search`: free-text search by name, ticker or identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSecurities {
    pub query: String,
    pub active: Option<bool>,
    pub page_size: u32,
}

impl SearchSecurities {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            active: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn active(mut self, yes: bool) -> Self {
        self.active = Some(yes);
        self
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }
}

impl Endpoint for SearchSecurities {
    type Output = ApiSecuritiesSearch;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let query = require("query", &self.query)?;
        Ok(ApiRequest::get([SECURITIES, "search"])
            .query("query", query)
            .query_opt("active", self.active)
            .query("page_size", self.page_size))
    }
}

/// `POST /securities/screen`: securities satisfying a [`ScreenGroup`].
///
/// The logic travels as the JSON body; ordering and paging as query parameters.
/// Sends `order_direction=asc`, `primary_only=false` and `page_size=100` unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSecurities {
    pub logic: ScreenGroup,
    pub order_column: Option<String>,
    pub order_direction: SortOrder,
    pub primary_only: bool,
    pub page_size: u32,
}

impl ScreenSecurities {
    pub fn new(logic: ScreenGroup) -> Self {
        Self {
            logic,
            order_column: None,
            order_direction: SortOrder::Asc,
            primary_only: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Data tag to order by.
    #[must_use]
    pub fn order_column(mut self, tag: impl Into<String>) -> Self {
        self.order_column = Some(tag.into());
        self
    }

    #[must_use]
    pub const fn order_direction(mut self, order: SortOrder) -> Self {
        self.order_direction = order;
        self
    }

    #[must_use]
    pub const fn primary_only(mut self, yes: bool) -> Self {
        self.primary_only = yes;
        self
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }
}

impl Endpoint for ScreenSecurities {
    type Output = Vec<SecurityScreenResult>;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        ApiRequest::post([SECURITIES, "screen"])
            .query_opt("order_column", self.order_column.as_deref())
            .query("order_direction", self.order_direction)
            .query("primary_only", self.primary_only)
            .query("page_size", self.page_size)
            .json(&self.logic)
    }
}

impl_paginated!(
    AllSecurities,
    SecurityHistoricalData,
    SecurityStockPrices,
    SecurityStockPriceAdjustments,
    SecurityIntradayPrices,
);
