//! Transport-independent request description.
//!
//! Every endpoint produces an [`ApiRequest`]; the async and blocking clients only
//! differ in how they execute it. That keeps parameter names, defaults and the
//! path layout identical between the two execution modes.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use url::Url;

use crate::core::IntrinioError;

/// Name of the query parameter carrying the API key.
pub(crate) const API_KEY_PARAM: &str = "api_key";

/// A single REST call: method, path segments, query pairs and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Starts a `GET` request for the given path segments.
    ///
    /// Segments are percent-encoded individually when the URL is built, so
    /// identifiers containing `/` or spaces stay within their segment.
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    /// Starts a `POST` request for the given path segments.
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a query parameter only when a value is present.
    #[must_use]
    pub fn query_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`IntrinioError::Json`] if the body cannot be serialized.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, IntrinioError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The unencoded path segments, relative to the base URL.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The query pairs in the order they will be sent (API key excluded).
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Looks up the first value for a query key.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Builds the absolute URL against `base`, appending the API key last.
    pub(crate) fn url(&self, base: &Url, api_key: Option<&str>) -> Result<Url, IntrinioError> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| IntrinioError::Config(format!("base URL {base} cannot be a base")))?;
            path.pop_if_empty();
            for seg in &self.segments {
                path.push(seg);
            }
        }
        if !self.query.is_empty() || api_key.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &self.query {
                pairs.append_pair(k, v);
            }
            if let Some(key) = api_key {
                pairs.append_pair(API_KEY_PARAM, key);
            }
        }
        Ok(url)
    }
}

/// A REST endpoint: knows how to describe its request and what it deserializes into.
///
/// Implemented by every request type in [`crate::securities`],
/// [`crate::stock_exchanges`], [`crate::technicals`] and [`crate::bulk_downloads`].
pub trait Endpoint {
    /// The model the response body deserializes into.
    type Output: DeserializeOwned;

    /// Describes the outbound request.
    ///
    /// # Errors
    ///
    /// Returns [`IntrinioError::InvalidParameter`] when a required parameter is
    /// missing, before any network I/O happens.
    fn request(&self) -> Result<ApiRequest, IntrinioError>;
}

/// Rejects blank parameters. The value is returned as given, not trimmed.
pub(crate) fn require<'a>(name: &str, value: &'a str) -> Result<&'a str, IntrinioError> {
    if value.trim().is_empty() {
        return Err(IntrinioError::InvalidParameter(format!(
            "`{name}` must not be empty"
        )));
    }
    Ok(value)
}

/// Validates a value that becomes one path segment.
///
/// `.` and `..` are dropped by URL path normalization, which would send the
/// request to a different endpoint, so they are rejected along with blanks.
pub(crate) fn require_segment<'a>(name: &str, value: &'a str) -> Result<&'a str, IntrinioError> {
    let value = require(name, value)?;
    if matches!(value, "." | "..") {
        return Err(IntrinioError::InvalidParameter(format!(
            "`{name}` must not be `{value}`"
        )));
    }
    Ok(value)
}

/// Renders a URL for logs and errors with the API key value masked.
pub(crate) fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
