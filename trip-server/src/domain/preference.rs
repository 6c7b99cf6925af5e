//! The user's optimization preference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the recommendation service should rank routes by.
///
/// Serialized on the wire as the `optimise_for` field with values
/// `"time"` and `"cost"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationPreference {
    /// Get there as fast as possible, even if it costs more.
    #[default]
    Time,
    /// Get there as cheaply as possible, even if it takes longer.
    Cost,
}

impl OptimizationPreference {
    /// Wire name for the preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationPreference::Time => "time",
            OptimizationPreference::Cost => "cost",
        }
    }

    /// Parse the wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "time" => Some(OptimizationPreference::Time),
            "cost" => Some(OptimizationPreference::Cost),
            _ => None,
        }
    }
}

impl fmt::Display for OptimizationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&OptimizationPreference::Time).unwrap(),
            "\"time\""
        );
        assert_eq!(
            serde_json::to_string(&OptimizationPreference::Cost).unwrap(),
            "\"cost\""
        );

        let pref: OptimizationPreference = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(pref, OptimizationPreference::Cost);
    }

    #[test]
    fn parse_round_trip() {
        for pref in [OptimizationPreference::Time, OptimizationPreference::Cost] {
            assert_eq!(OptimizationPreference::parse(pref.as_str()), Some(pref));
        }
        assert_eq!(OptimizationPreference::parse("distance"), None);
    }

    #[test]
    fn default_is_time() {
        assert_eq!(
            OptimizationPreference::default(),
            OptimizationPreference::Time
        );
    }
}
