//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::CachedGeocodeClient;
use crate::recommend::Recommender;
use crate::trip::{DEFAULT_PLAN_TIMEOUT, TripPlanner};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached geocoding client
    pub geocode: Arc<CachedGeocodeClient>,

    /// Route recommendation engine
    pub recommender: Arc<Recommender>,

    /// Deadline for a full planning pass
    pub plan_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(geocode: CachedGeocodeClient, recommender: Recommender) -> Self {
        Self {
            geocode: Arc::new(geocode),
            recommender: Arc::new(recommender),
            plan_timeout: DEFAULT_PLAN_TIMEOUT,
        }
    }

    pub fn with_plan_timeout(mut self, timeout: Duration) -> Self {
        self.plan_timeout = timeout;
        self
    }

    /// A planner over this state's geocoder and recommender.
    pub fn planner(&self) -> TripPlanner<Arc<CachedGeocodeClient>> {
        TripPlanner::new(self.geocode.clone(), self.recommender.clone())
            .with_timeout(self.plan_timeout)
    }
}
