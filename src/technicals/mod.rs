//! Technical indicators computed server-side from a security's price history.

mod indicator;

pub use indicator::Indicator;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::client::constants::DEFAULT_PAGE_SIZE;
use crate::core::models::SecuritySummary;
use crate::core::pagination::{impl_page, impl_paginated};
use crate::core::request::{ApiRequest, Endpoint, require_segment};
use crate::core::IntrinioError;

/// Name and symbol of the indicator a series belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalIndicatorInfo {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// One point of an indicator series.
///
/// Output names differ per indicator (`rsi`, `macd_line`, `upper_band`, ...), so
/// they are kept in a map rather than fixed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalValue {
    pub date_time: DateTime<Utc>,
    #[serde(flatten)]
    pub values: BTreeMap<String, Option<f64>>,
}

impl TechnicalValue {
    /// The value of output `name` at this point, if present and non-null.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied().flatten()
    }
}

/// A page of an indicator series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiTechnicals {
    #[serde(default)]
    pub technicals: Vec<TechnicalValue>,
    pub indicator: Option<TechnicalIndicatorInfo>,
    pub security: Option<SecuritySummary>,
    pub next_page: Option<String>,
}

/// `GET /securities/{identifier}/prices/technicals/{indicator}`.
///
/// ```no_run
/// # use intrinio_rs::IntrinioClient;
/// # use intrinio_rs::technicals::{Indicator, SecurityTechnicals};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrinioClient::from_env()?;
/// let series = client.send(&SecurityTechnicals::new("AAPL", Indicator::macd())).await?;
/// for point in &series.technicals {
///     println!("{} {:?}", point.date_time, point.value("macd_line"));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityTechnicals {
    pub identifier: String,
    pub indicator: Indicator,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page_size: u32,
    pub next_page: Option<String>,
}

impl SecurityTechnicals {
    pub fn new(identifier: impl Into<String>, indicator: Indicator) -> Self {
        Self {
            identifier: identifier.into(),
            indicator,
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

impl Endpoint for SecurityTechnicals {
    type Output = ApiTechnicals;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        let id = require_segment("identifier", &self.identifier)?;
        let mut req = ApiRequest::get(["securities", id, "prices", "technicals", self.indicator.code()]);
        for (key, value) in self.indicator.params() {
            req = req.query(key, value);
        }
        Ok(req
            .query_opt("start_date", self.start_date)
            .query_opt("end_date", self.end_date)
            .query("page_size", self.page_size)
            .query_opt("next_page", self.next_page.as_deref()))
    }
}

impl_page!(ApiTechnicals);
impl_paginated!(SecurityTechnicals);
