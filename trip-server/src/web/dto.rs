//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Cost, InvalidCoordinates, Location, OptimizationPreference, RecommendationRequest,
    RecommendationResponse, Route, RouteSegment,
};
use crate::geocode::ResolvedLocation;

/// Wire format for timestamps, e.g. "07/23/2019 16:30".
pub const TIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// A point on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointDto {
    pub lat: f64,
    pub long: f64,
}

impl PointDto {
    /// Validate into a domain location.
    pub fn to_location(self) -> Result<Location, InvalidCoordinates> {
        Location::new(self.lat, self.long)
    }
}

/// Request for route recommendations between two resolved points.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequestDto {
    /// Trip start point
    pub start: PointDto,

    /// Trip destination point
    pub dest: PointDto,

    /// What to rank routes by
    #[serde(default)]
    pub optimise_for: OptimizationPreference,

    /// Departure time in `TIME_FORMAT`, defaults to now
    #[serde(default)]
    pub depart_at: Option<String>,
}

impl RecommendationRequestDto {
    /// Validate into a domain request.
    pub fn to_domain(&self) -> Result<RecommendationRequest, InvalidCoordinates> {
        Ok(RecommendationRequest {
            start: self.start.to_location()?,
            dest: self.dest.to_location()?,
            optimise_for: self.optimise_for,
        })
    }
}

/// Request to plan a trip from free-text location queries.
#[derive(Debug, Deserialize)]
pub struct PlanRequestDto {
    /// Free-text start query
    pub start: String,

    /// Free-text destination query
    pub dest: String,

    /// What to rank routes by
    #[serde(default)]
    pub optimise_for: OptimizationPreference,

    /// Departure time in `TIME_FORMAT`, defaults to now
    #[serde(default)]
    pub depart_at: Option<String>,
}

/// A geocoding candidate in autocomplete results.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    /// Formatted address, or empty if the service supplied none
    pub address: String,

    pub lat: f64,
    pub long: f64,

    /// Match confidence reported by the upstream service
    pub confidence: String,
}

impl PlaceResult {
    pub fn from_resolved(resolved: &ResolvedLocation) -> Self {
        Self {
            address: resolved.location.address().unwrap_or_default().to_string(),
            lat: resolved.location.lat(),
            long: resolved.location.long(),
            confidence: format!("{:?}", resolved.confidence),
        }
    }
}

/// A recommended route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Route identifier, stable within one response
    pub id: String,

    /// Departure time in `TIME_FORMAT`
    pub start_time: String,

    /// Arrival time in `TIME_FORMAT`
    pub end_time: String,

    /// Total duration in minutes
    pub duration_mins: i64,

    /// Total cost in dollars
    pub cost: Cost,

    /// Classification badges relative to the other routes in the response
    pub badges: Vec<String>,

    /// The legs of the route, in travel order
    pub segments: Vec<SegmentResult>,
}

/// One leg of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Travel mode
    pub mode: String,

    /// Duration in minutes
    pub duration_mins: i64,

    /// Cost in dollars, absent for free legs
    pub cost: Option<Cost>,

    /// Human-readable instruction for this leg
    pub desc: String,
}

/// Response for route recommendations.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    /// Recommended routes, ranked best first
    pub routes: Vec<RouteResult>,
}

/// Response for trip planning: the resolved endpoints plus the routes.
#[derive(Debug, Serialize)]
pub struct PlanResult {
    pub start: PlaceResult,
    pub dest: PlaceResult,
    pub routes: Vec<RouteResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id().as_str().to_string(),
            start_time: format_time(route.start_time()),
            end_time: format_time(route.end_time()),
            duration_mins: route.total_duration().num_minutes(),
            cost: route.total_cost(),
            badges: route
                .badges()
                .iter()
                .map(|b| b.as_str().to_string())
                .collect(),
            segments: route.segments().iter().map(SegmentResult::from_segment).collect(),
        }
    }
}

impl SegmentResult {
    /// Create from a domain RouteSegment.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            mode: segment.mode().as_str().to_string(),
            duration_mins: segment.duration().num_minutes(),
            cost: segment.cost(),
            desc: segment.instruction().to_string(),
        }
    }
}

impl RecommendationResult {
    /// Create from a domain response.
    pub fn from_response(response: &RecommendationResponse) -> Self {
        Self {
            routes: response.routes().iter().map(RouteResult::from_route).collect(),
        }
    }
}

/// Format a timestamp in the wire format.
pub fn format_time(time: NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parse a timestamp in the wire format.
pub fn parse_time(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIME_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Badges, RouteId, TravelMode};
    use chrono::{Duration, NaiveDate};

    fn depart() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 7, 23)
            .unwrap()
            .and_hms_opt(16, 30, 0)
            .unwrap()
    }

    fn make_route() -> Route {
        let segments = vec![
            RouteSegment::new(
                TravelMode::Wait,
                Duration::minutes(4),
                None,
                "Wait for your Lyft pickup".to_string(),
            )
            .unwrap(),
            RouteSegment::new(
                TravelMode::Rideshare,
                Duration::minutes(22),
                Some(Cost::from_dollars(14.50)),
                "Take a rideshare (Lyft) to Pike Place Market".to_string(),
            )
            .unwrap(),
        ];

        let badges = Badges {
            quickest: true,
            ..Badges::none()
        };

        Route::new(RouteId::new("option-1"), segments, depart(), badges).unwrap()
    }

    #[test]
    fn route_result_from_route() {
        let result = RouteResult::from_route(&make_route());

        assert_eq!(result.id, "option-1");
        assert_eq!(result.start_time, "07/23/2019 16:30");
        assert_eq!(result.end_time, "07/23/2019 16:56");
        assert_eq!(result.duration_mins, 26);
        assert_eq!(result.cost, Cost::from_dollars(14.50));
        assert_eq!(result.badges, vec!["quickest"]);
        assert_eq!(result.segments.len(), 2);

        let ride = &result.segments[1];
        assert_eq!(ride.mode, "rideshare");
        assert_eq!(ride.duration_mins, 22);
        assert_eq!(ride.cost, Some(Cost::from_dollars(14.50)));
    }

    #[test]
    fn route_result_serializes_cost_as_dollars() {
        let json = serde_json::to_value(RouteResult::from_route(&make_route())).unwrap();
        assert_eq!(json["cost"], serde_json::json!(14.5));
        assert_eq!(json["segments"][0]["cost"], serde_json::Value::Null);
    }

    #[test]
    fn recommendation_request_parses_wire_shape() {
        let json = r#"{
            "start": { "lat": 47.6205, "long": -122.3493 },
            "dest": { "lat": 47.6097, "long": -122.3422 },
            "optimise_for": "cost"
        }"#;

        let dto: RecommendationRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.optimise_for, OptimizationPreference::Cost);
        assert!(dto.depart_at.is_none());

        let request = dto.to_domain().unwrap();
        assert_eq!(request.start.lat(), 47.6205);
        assert_eq!(request.dest.long(), -122.3422);
    }

    #[test]
    fn recommendation_request_defaults_to_time() {
        let json = r#"{
            "start": { "lat": 0.0, "long": 0.0 },
            "dest": { "lat": 1.0, "long": 1.0 }
        }"#;

        let dto: RecommendationRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.optimise_for, OptimizationPreference::Time);
    }

    #[test]
    fn autocomplete_candidates_serialize_as_bare_array() {
        use crate::geocode::Confidence;

        let resolved = ResolvedLocation {
            location: Location::new(47.6062, -122.3321)
                .unwrap()
                .with_address("Seattle, WA"),
            confidence: Confidence::High,
        };

        let places: Vec<PlaceResult> = vec![PlaceResult::from_resolved(&resolved)];
        let value = serde_json::to_value(&places).unwrap();

        // the endpoint contract is a bare array, not a wrapper object
        assert!(value.is_array());
        assert_eq!(value[0]["address"], "Seattle, WA");
        assert_eq!(value[0]["lat"], 47.6062);
    }

    #[test]
    fn out_of_range_point_is_rejected() {
        let dto = PointDto {
            lat: 91.0,
            long: 0.0,
        };
        assert!(dto.to_location().is_err());
    }

    #[test]
    fn time_round_trip() {
        let t = depart();
        assert_eq!(format_time(t), "07/23/2019 16:30");
        assert_eq!(parse_time("07/23/2019 16:30").unwrap(), t);
        assert!(parse_time("2019-07-23T16:30").is_err());
    }
}
