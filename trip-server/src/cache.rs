//! Caching layer for geocoding responses.
//!
//! Geocoding the same query text repeatedly is common (every form
//! submission re-resolves both endpoints), and upstream lookups are
//! metered. We cache the converted candidate list keyed by normalized
//! query text, with a TTL so stale addresses eventually refresh.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::geocode::{GeocodeClient, GeocodeError, Geocoder, ResolvedLocation};

/// Cached candidate list for one query.
type CandidateEntry = Arc<Vec<ResolvedLocation>>;

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached queries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Normalize query text for use as a cache key.
///
/// Trims, lowercases, and collapses internal whitespace so that
/// "Space  Needle " and "space needle" share an entry.
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cache for converted geocoding candidates.
pub struct GeocodeCache {
    candidates: MokaCache<String, CandidateEntry>,
}

impl GeocodeCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let candidates = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { candidates }
    }

    /// Get a cached candidate list.
    pub async fn get(&self, key: &str) -> Option<CandidateEntry> {
        self.candidates.get(key).await
    }

    /// Insert a candidate list.
    pub async fn insert(&self, key: String, entry: CandidateEntry) {
        self.candidates.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.candidates.entry_count()
    }
}

/// Geocoding client with caching.
///
/// Wraps a `GeocodeClient` and caches candidate lists per query.
pub struct CachedGeocodeClient {
    client: GeocodeClient,
    cache: GeocodeCache,
}

impl CachedGeocodeClient {
    /// Create a new cached client.
    pub fn new(client: GeocodeClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: GeocodeCache::new(cache_config),
        }
    }

    /// Get candidates for a query, using the cache if possible.
    ///
    /// Only successful lookups populate the cache; failures (including
    /// no-match queries) are retried on the next request.
    pub async fn candidates(&self, query: &str) -> Result<CandidateEntry, GeocodeError> {
        let key = normalize_query(query);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let candidates = self.client.candidates(query).await?;
        let entry = Arc::new(candidates);

        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Resolve a query to its best candidate, using the cache.
    pub async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        let candidates = self.candidates(query).await?;
        // candidate lists are non-empty by construction
        Ok(candidates[0].clone())
    }

    /// Reverse-geocode a point. Not cached: point lookups are rare and
    /// effectively unique keys.
    pub async fn reverse(&self, lat: f64, long: f64) -> Result<ResolvedLocation, GeocodeError> {
        self.client.reverse(lat, long).await
    }
}

impl Geocoder for CachedGeocodeClient {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        CachedGeocodeClient::resolve(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_normalization() {
        assert_eq!(normalize_query("Space Needle"), "space needle");
        assert_eq!(normalize_query("  Space   Needle  "), "space needle");
        assert_eq!(normalize_query("400 Broad St"), "400 broad st");
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn cache_creation() {
        let config = CacheConfig::default();
        let cache = GeocodeCache::new(&config);
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = GeocodeCache::new(&CacheConfig::default());
        let entry: CandidateEntry = Arc::new(vec![]);

        cache.insert("space needle".to_string(), entry.clone()).await;

        let got = cache.get("space needle").await;
        assert!(got.is_some());
        assert!(cache.get("somewhere else").await.is_none());
    }
}
