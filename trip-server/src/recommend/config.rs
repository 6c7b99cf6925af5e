//! Configuration for the recommendation engine.

use chrono::Duration;

use crate::domain::Cost;

/// Tunable parameters for candidate route construction.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Walking speed in km/h.
    pub walk_speed_kmh: f64,

    /// Average door-to-door transit speed in km/h, stops included.
    pub transit_speed_kmh: f64,

    /// Average rideshare speed in km/h in city traffic.
    pub rideshare_speed_kmh: f64,

    /// Flat transit fare per trip.
    pub transit_fare: Cost,

    /// Minutes between transit departures; expected wait is half this.
    pub transit_headway_mins: i64,

    /// Walk distance to/from the transit stop, in km.
    pub access_walk_km: f64,

    /// Trips at most this long (km) also get a walk-only route.
    pub max_walk_only_km: f64,

    /// Minutes to wait for a rideshare pickup.
    pub pickup_wait_mins: i64,

    /// Maximum number of routes to return.
    pub max_results: usize,
}

impl RecommendConfig {
    /// Expected wait for the next transit departure.
    pub fn transit_wait(&self) -> Duration {
        // half the headway, rounded up to a whole minute
        Duration::minutes((self.transit_headway_mins + 1) / 2)
    }

    /// Wait for a rideshare pickup.
    pub fn pickup_wait(&self) -> Duration {
        Duration::minutes(self.pickup_wait_mins)
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            walk_speed_kmh: 4.8,
            transit_speed_kmh: 26.0,
            rideshare_speed_kmh: 38.0,
            transit_fare: Cost::from_dollars(2.75),
            transit_headway_mins: 15,
            access_walk_km: 0.4,
            max_walk_only_km: 2.0,
            pickup_wait_mins: 4,
            max_results: 10,
        }
    }
}
