//! Bulk downloads: signed links to full-dataset files.
//!
//! The links are returned as-is; downloading the files is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::request::{ApiRequest, Endpoint};
use crate::core::IntrinioError;

/// One downloadable file of a bulk dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDownloadLink {
    pub name: Option<String>,
    /// Pre-signed URL; it expires server-side.
    pub url: String,
}

/// A bulk dataset and the links to its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDownloadSummary {
    pub id: String,
    pub name: Option<String>,
    pub format: Option<String>,
    #[serde(default, deserialize_with = "crate::core::models::lenient_string")]
    pub data_length_bytes: Option<String>,
    pub update_frequency: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub links: Vec<BulkDownloadLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiBulkDownloadLinks {
    #[serde(default)]
    pub bulk_downloads: Vec<BulkDownloadSummary>,
}

impl ApiBulkDownloadLinks {
    /// Finds a dataset by its display name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&BulkDownloadSummary> {
        self.bulk_downloads.iter().find(|d| {
            d.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }
}

/// `GET /bulk_downloads/links`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkDownloadLinks;

impl BulkDownloadLinks {
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for BulkDownloadLinks {
    type Output = ApiBulkDownloadLinks;

    fn request(&self) -> Result<ApiRequest, IntrinioError> {
        Ok(ApiRequest::get(["bulk_downloads", "links"]))
    }
}
