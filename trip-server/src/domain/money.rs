//! Money handling for fares and route totals.
//!
//! Costs are stored in integer cents so that totals and minima are exact.
//! On the wire (and in the original fare tables) costs appear as fractional
//! dollars, so serde converts at the boundary.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary amount in US cents.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Cost;
///
/// let fare = Cost::from_dollars(6.5);
/// assert_eq!(fare.cents(), 650);
/// assert_eq!(fare.to_string(), "$6.50");
///
/// let total = fare + Cost::from_cents(145);
/// assert_eq!(total.as_dollars(), 7.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(i64);

impl Cost {
    /// Zero dollars.
    pub const ZERO: Cost = Cost(0);

    /// Construct from an exact number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Cost(cents)
    }

    /// Construct from dollars, rounding to the nearest cent.
    pub fn from_dollars(dollars: f64) -> Self {
        Cost((dollars * 100.0).round() as i64)
    }

    /// The amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// The amount in dollars.
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_dollars())
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Ok(Cost::from_dollars(dollars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_round_trip() {
        assert_eq!(Cost::from_dollars(6.5).cents(), 650);
        assert_eq!(Cost::from_dollars(3.14).cents(), 314);
        assert_eq!(Cost::from_dollars(0.0), Cost::ZERO);
    }

    #[test]
    fn rounding_to_cent() {
        // 1.005 dollars lands on 100.5 cents; round half away from zero
        assert_eq!(Cost::from_dollars(33.456).cents(), 3346);
        assert_eq!(Cost::from_dollars(0.004).cents(), 0);
    }

    #[test]
    fn display_format() {
        assert_eq!(Cost::from_cents(314).to_string(), "$3.14");
        assert_eq!(Cost::from_cents(650).to_string(), "$6.50");
        assert_eq!(Cost::from_cents(5).to_string(), "$0.05");
        assert_eq!(Cost::from_cents(1000).to_string(), "$10.00");
    }

    #[test]
    fn sum_and_add() {
        let total: Cost = [Cost::from_cents(650), Cost::from_cents(145)]
            .into_iter()
            .sum();
        assert_eq!(total, Cost::from_cents(795));
        assert_eq!(total + Cost::ZERO, total);
    }

    #[test]
    fn ordering_is_exact() {
        assert!(Cost::from_dollars(2.50) < Cost::from_dollars(8.25));
        assert!(Cost::from_cents(250) == Cost::from_dollars(2.5));
    }

    #[test]
    fn serde_as_dollars() {
        let json = serde_json::to_string(&Cost::from_cents(650)).unwrap();
        assert_eq!(json, "6.5");

        let cost: Cost = serde_json::from_str("3.14").unwrap();
        assert_eq!(cost, Cost::from_cents(314));
    }
}
