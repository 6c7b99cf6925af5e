//! Mock geocoding client for testing without API access.
//!
//! Loads canned locations responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::convert::{ResolvedLocation, convert_response};
use super::error::GeocodeError;
use super::types::LocationsResponse;

/// Turn a free-text query into a mock file stem.
///
/// Lowercases and replaces runs of non-alphanumeric characters with a
/// single underscore, so "Space Needle, Seattle" maps to
/// `space_needle_seattle.json`.
pub fn query_slug(query: &str) -> String {
    let mut slug = String::with_capacity(query.len());
    let mut last_was_sep = true;

    for c in query.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('_');
            last_was_sep = true;
        }
    }

    while slug.ends_with('_') {
        slug.pop();
    }

    slug
}

/// Mock geocoding client that serves data from JSON files.
///
/// Useful for development and testing without real maps API credentials.
/// Expects files named `{slug}.json` where the slug is `query_slug` of the
/// query text, each holding a raw locations response.
#[derive(Clone)]
pub struct MockGeocodeClient {
    /// Pre-loaded responses, keyed by query slug.
    responses: Arc<RwLock<HashMap<String, LocationsResponse>>>,
}

impl MockGeocodeClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, GeocodeError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| GeocodeError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| GeocodeError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let slug = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| GeocodeError::Api {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| GeocodeError::Api {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let response: LocationsResponse =
                serde_json::from_str(&json).map_err(|e| GeocodeError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            responses.insert(slug, response);
        }

        if responses.is_empty() {
            return Err(GeocodeError::Api {
                status: 0,
                message: format!("No mock location files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            responses: Arc::new(RwLock::new(responses)),
        })
    }

    /// Get candidates for a query, mimicking `GeocodeClient::candidates`.
    ///
    /// A query with no matching file behaves like a query the live service
    /// has no candidates for.
    pub async fn candidates(&self, query: &str) -> Result<Vec<ResolvedLocation>, GeocodeError> {
        let responses = self.responses.read().await;

        let response = responses
            .get(&query_slug(query))
            .ok_or_else(|| GeocodeError::NoMatches {
                query: query.to_string(),
            })?;

        convert_response(response, query)
    }

    /// Resolve a query to its best candidate.
    pub async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        let mut candidates = self.candidates(query).await?;
        Ok(candidates.remove(0))
    }
}
