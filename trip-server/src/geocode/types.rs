//! Wire types for the upstream locations API.
//!
//! The API wraps results in `resourceSets[0].resources`, with each resource
//! carrying a coordinate pair, a formatted address, and a confidence level.

use serde::Deserialize;

/// Top-level locations response.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsResponse {
    #[serde(rename = "resourceSets", default)]
    pub resource_sets: Vec<ResourceSet>,
}

impl LocationsResponse {
    /// The location resources of the first (and in practice only) set.
    pub fn resources(&self) -> &[LocationResource] {
        self.resource_sets
            .first()
            .map(|set| set.resources.as_slice())
            .unwrap_or(&[])
    }
}

/// One set of resources in a response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceSet {
    #[serde(default)]
    pub resources: Vec<LocationResource>,
}

/// A candidate location.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationResource {
    pub point: Point,
    pub address: Address,
    pub confidence: String,
}

/// A coordinate pair, `[latitude, longitude]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Point {
    pub coordinates: Vec<f64>,
}

/// Address fields of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(rename = "formattedAddress")]
    pub formatted_address: String,
}
