//! Geocoding layer.
//!
//! Talks to the upstream locations API to turn free-text place queries
//! into validated domain locations.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::sync::Arc;

pub use client::{GeocodeClient, GeocodeConfig};
pub use convert::{Confidence, ResolvedLocation, convert_resource, convert_response};
pub use error::GeocodeError;
pub use mock::{MockGeocodeClient, query_slug};
pub use types::{Address, LocationResource, LocationsResponse, Point, ResourceSet};

/// Anything that can resolve a free-text query to a location.
///
/// The seam between the trip planner and the concrete client, so the
/// planner can be driven by the live client, the cached client, or the
/// mock in tests.
pub trait Geocoder: Send + Sync {
    /// Resolve a query to its best candidate.
    fn resolve(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<ResolvedLocation, GeocodeError>> + Send;
}

impl Geocoder for GeocodeClient {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        GeocodeClient::resolve(self, query).await
    }
}

impl Geocoder for MockGeocodeClient {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        MockGeocodeClient::resolve(self, query).await
    }
}

impl<G: Geocoder> Geocoder for Arc<G> {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, GeocodeError> {
        (**self).resolve(query).await
    }
}
