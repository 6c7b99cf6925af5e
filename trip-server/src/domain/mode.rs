//! Travel modes for route segments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The travel mode of a single route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// On foot.
    Walk,
    /// A scheduled transit vehicle (bus, light rail).
    Transit,
    /// A hired car (Uber, Lyft).
    Rideshare,
    /// Waiting at a stop or for a pickup.
    Wait,
}

impl TravelMode {
    /// Wire/display name for the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Transit => "transit",
            TravelMode::Rideshare => "rideshare",
            TravelMode::Wait => "wait",
        }
    }

    /// Human-readable label for route detail rows.
    pub fn label(&self) -> &'static str {
        match self {
            TravelMode::Walk => "Walk",
            TravelMode::Transit => "Transit",
            TravelMode::Rideshare => "Rideshare",
            TravelMode::Wait => "Wait",
        }
    }

    /// Fixed icon class for this mode.
    ///
    /// The icon set is fixed per mode so route cards render consistently.
    pub fn icon(&self) -> &'static str {
        match self {
            TravelMode::Walk => "fa-female",
            TravelMode::Transit => "fa-bus",
            TravelMode::Rideshare => "fa-car",
            TravelMode::Wait => "fa-clock-o",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
