//! Trip planning: resolve both ends of a trip, then ask the recommendation
//! engine for ranked routes.

mod error;

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::info;

use crate::domain::{OptimizationPreference, RecommendationRequest, RecommendationResponse};
use crate::geocode::{Geocoder, ResolvedLocation};
use crate::recommend::Recommender;

pub use error::{TripEnd, TripError};

/// Default deadline for a whole planning pass, geocoding included.
pub const DEFAULT_PLAN_TIMEOUT: Duration = Duration::from_secs(15);

/// A fully planned trip: the resolved endpoints plus the ranked routes.
#[derive(Debug, Clone)]
pub struct PlannedTrip {
    pub start: ResolvedLocation,
    pub dest: ResolvedLocation,
    pub response: RecommendationResponse,
}

/// Resolves trip endpoints and produces recommendations.
///
/// Both endpoint queries are geocoded concurrently. If either fails to
/// resolve, no recommendation request is made at all.
pub struct TripPlanner<G> {
    geocoder: G,
    recommender: Arc<Recommender>,
    timeout: Duration,
}

impl<G: Geocoder> TripPlanner<G> {
    pub fn new(geocoder: G, recommender: Arc<Recommender>) -> Self {
        Self {
            geocoder,
            recommender,
            timeout: DEFAULT_PLAN_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Plan a trip from free-text queries, bounded by the configured timeout.
    pub async fn plan(
        &self,
        start_query: &str,
        dest_query: &str,
        optimise_for: OptimizationPreference,
        departure: NaiveDateTime,
    ) -> Result<PlannedTrip, TripError> {
        tokio::time::timeout(
            self.timeout,
            self.plan_inner(start_query, dest_query, optimise_for, departure),
        )
        .await
        .map_err(|_| TripError::Timeout)?
    }

    async fn plan_inner(
        &self,
        start_query: &str,
        dest_query: &str,
        optimise_for: OptimizationPreference,
        departure: NaiveDateTime,
    ) -> Result<PlannedTrip, TripError> {
        let (start, dest) = tokio::join!(
            self.geocoder.resolve(start_query),
            self.geocoder.resolve(dest_query),
        );

        // Surface the start failure first when both ends fail
        let start = start.map_err(|e| TripError::for_start(start_query, e))?;
        let dest = dest.map_err(|e| TripError::for_destination(dest_query, e))?;

        info!(
            start = %start.location,
            dest = %dest.location,
            %optimise_for,
            "endpoints resolved, requesting recommendations"
        );

        let request = RecommendationRequest {
            start: start.location.clone(),
            dest: dest.location.clone(),
            optimise_for,
        };
        let response = self.recommender.recommend(&request, departure)?;

        Ok(PlannedTrip {
            start,
            dest,
            response,
        })
    }
}
