//! Locations API HTTP client.
//!
//! Provides async methods for forward and reverse geocoding against the
//! upstream maps service. Handles authentication, concurrency limiting,
//! and conversion to domain types.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use super::convert::{ResolvedLocation, convert_response};
use super::error::GeocodeError;
use super::types::LocationsResponse;

/// Default base URL for the locations API.
const DEFAULT_BASE_URL: &str = "http://dev.virtualearth.net/REST/v1";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to the production service)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Locations API client.
///
/// Provides forward geocoding (query text to candidate locations) and
/// reverse geocoding (point to address). Uses a semaphore to limit
/// concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl GeocodeClient {
    /// Create a new geocoding client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get all candidate locations for a free-text query, sorted by
    /// descending geocoder confidence.
    pub async fn candidates(&self, query: &str) -> Result<Vec<ResolvedLocation>, GeocodeError> {
        let url = format!("{}/Locations", self.base_url);
        let params = [
            ("query", query),
            ("inclnb", "1"),
            ("key", self.api_key.as_str()),
        ];

        debug!(query, "geocoding query");
        let response = self.get_locations(&url, &params).await?;
        convert_response(&response, query)
    }

    /// Resolve a free-text query to its best candidate.
    ///
    /// # Errors
    ///
    /// Returns `NoMatches` if the service has no candidate for the query.
    pub async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        let mut candidates = self.candidates(query).await?;
        // convert_response guarantees a non-empty, sorted list
        Ok(candidates.remove(0))
    }

    /// Reverse-geocode a point to its nearest address.
    pub async fn reverse(&self, lat: f64, long: f64) -> Result<ResolvedLocation, GeocodeError> {
        let url = format!("{}/Locations/{},{}", self.base_url, lat, long);
        let params = [("key", self.api_key.as_str())];
        let query = format!("{lat},{long}");

        debug!(lat, long, "reverse geocoding point");
        let response = self.get_locations(&url, &params).await?;
        let mut candidates = convert_response(&response, &query)?;
        Ok(candidates.remove(0))
    }

    /// Issue a GET to a locations endpoint and parse the response.
    async fn get_locations(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<LocationsResponse, GeocodeError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(params).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GeocodeError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
