//! Trip planning error taxonomy.

use crate::geocode::GeocodeError;
use crate::recommend::RecommendError;

/// Which end of the trip a geocoding failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripEnd {
    Start,
    Destination,
}

impl TripEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripEnd::Start => "start",
            TripEnd::Destination => "destination",
        }
    }
}

impl std::fmt::Display for TripEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from planning a trip end to end.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    /// A location query matched nothing, so no recommendation was requested.
    #[error("could not resolve {end} location {query:?}")]
    LocationNotResolved { end: TripEnd, query: String },

    /// A geocoding call failed for transport or service reasons.
    #[error("geocoding {end} location failed: {source}")]
    Geocode {
        end: TripEnd,
        #[source]
        source: GeocodeError,
    },

    /// The recommendation engine could not produce any routes.
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    /// Planning did not complete within the configured deadline.
    #[error("trip planning timed out")]
    Timeout,
}

impl TripError {
    fn from_geocode(end: TripEnd, query: &str, err: GeocodeError) -> Self {
        if err.is_no_matches() {
            TripError::LocationNotResolved {
                end,
                query: query.to_string(),
            }
        } else {
            TripError::Geocode { end, source: err }
        }
    }

    pub(super) fn for_start(query: &str, err: GeocodeError) -> Self {
        Self::from_geocode(TripEnd::Start, query, err)
    }

    pub(super) fn for_destination(query: &str, err: GeocodeError) -> Self {
        Self::from_geocode(TripEnd::Destination, query, err)
    }
}
