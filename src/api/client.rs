//! HTTP client for the two upstream services: the REST Countries API and the
//! per-country boundary-geometry service. Base URLs are injected from config;
//! nothing here is hardcoded to production hosts, which is also what lets the
//! integration tests point the client at a wiremock server.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fmt;

use super::geometry::BoundaryGeometry;
use super::types::{CountryRecord, CountrySummary};

/// Errors from upstream lookups.
///
/// `NotFound` is kept separate from transport/server failures even though
/// the UI collapses them into one message, so the log always carries the
/// real cause.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Upstream returned a non-success status other than 404.
    Api { status: u16, message: String },
    /// The lookup matched nothing (HTTP 404 or an empty result array).
    NotFound(String),
    /// The response body didn't match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::NotFound(lookup) => write!(f, "no match for {lookup:?}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Read-only client over both upstreams. Cheap to clone; the inner
/// `reqwest::Client` is a shared connection pool.
#[derive(Clone)]
pub struct CountriesClient {
    api_base: String,
    geo_base: String,
    http: reqwest::Client,
}

impl CountriesClient {
    pub fn new(api_base: &str, geo_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            geo_base: geo_base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Exact-match lookup by common name. `fullText=true` keeps the match
    /// full-text rather than prefix, avoiding ambiguous multi-result
    /// responses; if the endpoint still returns several, the first wins.
    pub async fn country_by_name(&self, name: &str) -> Result<CountryRecord, ApiError> {
        let url = format!("{}/name/{}?fullText=true", self.api_base, name);
        let records: Vec<CountryRecord> = self.get_json(&url, name).await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }

    /// Prefix search, returning display names in upstream order. Sorting is
    /// the caller's concern.
    pub async fn search_names(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/name/{}", self.api_base, prefix);
        let matches: Vec<CountrySummary> = self.get_json(&url, prefix).await?;
        Ok(matches.into_iter().map(|c| c.name.common).collect())
    }

    /// All countries of a region, in upstream order.
    pub async fn countries_in_region(
        &self,
        region: &str,
    ) -> Result<Vec<CountrySummary>, ApiError> {
        let url = format!("{}/region/{}", self.api_base, region);
        self.get_json(&url, region).await
    }

    /// All countries of a subregion, in upstream order.
    pub async fn countries_in_subregion(
        &self,
        subregion: &str,
    ) -> Result<Vec<CountrySummary>, ApiError> {
        let url = format!("{}/subregion/{}", self.api_base, subregion);
        self.get_json(&url, subregion).await
    }

    /// Boundary geometry keyed by cca3 code. Best-effort: callers swallow
    /// the error and render without an overlay.
    pub async fn boundary(&self, code: &str) -> Result<BoundaryGeometry, ApiError> {
        let url = format!("{}/{}.geo.json", self.geo_base, code.to_uppercase());
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ApiError::NotFound(code.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string()),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        BoundaryGeometry::from_json(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        lookup: &str,
    ) -> Result<T, ApiError> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{url} -> {status}");
        // REST Countries answers 404 for lookups that match nothing.
        if status.as_u16() == 404 {
            return Err(ApiError::NotFound(lookup.to_string()));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error: {} - {}", status, message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = CountriesClient::new("https://api.example/v3.1/", "https://geo.example/");
        assert_eq!(client.api_base, "https://api.example/v3.1");
        assert_eq!(client.geo_base, "https://geo.example");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Api {
            status: 500,
            message: "oops".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): oops");
        assert_eq!(
            ApiError::NotFound("Nonexistent".to_string()).to_string(),
            "no match for \"Nonexistent\""
        );
    }
}
