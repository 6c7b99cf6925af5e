//! Rideshare fare estimation.
//!
//! Published Seattle-area fare schedules for the supported rideshare
//! operators. Fares are a function of distance and ride duration plus
//! fixed fees, clamped to the operator's minimum fare.

use chrono::Duration;

use crate::domain::Cost;

/// A rideshare operator's fare schedule, in dollars.
#[derive(Debug, Clone, PartialEq)]
pub struct FareSchedule {
    /// Operator display name.
    pub operator: &'static str,
    /// Flat base fare.
    pub base_fare: f64,
    /// Fixed per-ride fees (service/booking/city fees).
    pub fees: f64,
    /// Dollars per mile.
    pub cost_per_mile: f64,
    /// Dollars per minute of ride time.
    pub cost_per_minute: f64,
    /// Fares never drop below this amount.
    pub minimum_fare: f64,
}

/// Lyft: base 1.42, service fee 2.00, Seattle city fee 0.24.
pub const LYFT: FareSchedule = FareSchedule {
    operator: "Lyft",
    base_fare: 1.42,
    fees: 2.00 + 0.24,
    cost_per_mile: 1.48,
    cost_per_minute: 0.25,
    minimum_fare: 3.50,
};

/// Uber: base 1.42, booking fee 1.95.
pub const UBER: FareSchedule = FareSchedule {
    operator: "Uber",
    base_fare: 1.42,
    fees: 1.95,
    cost_per_mile: 1.48,
    cost_per_minute: 0.25,
    minimum_fare: 5.45,
};

impl FareSchedule {
    /// Estimate the fare for a ride of the given distance and duration.
    pub fn estimate(&self, distance_miles: f64, duration: Duration) -> Cost {
        let minutes = duration.num_seconds() as f64 / 60.0;
        let fare = self.base_fare
            + self.fees
            + distance_miles * self.cost_per_mile
            + minutes * self.cost_per_minute;

        Cost::from_dollars(fare.max(self.minimum_fare))
    }
}
