//! Core components of the `intrinio-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`IntrinioClient`] and its builder.
//! - The primary [`IntrinioError`] type.
//! - The transport-independent [`ApiRequest`] and the [`Endpoint`] trait.
//! - The [`ApiResponse`] envelope and cursor pagination.
//! - Shared data models like [`SecuritySummary`] and [`StockPriceSummary`].

/// The main client (`IntrinioClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IntrinioError`) for the crate.
pub mod error;
/// Shared data models and parameter enums.
pub mod models;
/// Cursor pagination traits.
pub mod pagination;
/// Request description and the `Endpoint` trait.
pub mod request;
/// The status/headers/payload envelope.
pub mod response;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IntrinioClient`
pub use client::{IntrinioClient, IntrinioClientBuilder};
pub use error::IntrinioError;
pub use models::{
    Frequency, PriceKey, RealtimeSource, RealtimeStockPrice, SecuritySummary, SortOrder,
    StockExchange, StockPriceAdjustmentSummary, StockPriceSummary,
};
pub use pagination::{Page, Paginated};
pub use request::{ApiRequest, Endpoint};
pub use response::ApiResponse;
