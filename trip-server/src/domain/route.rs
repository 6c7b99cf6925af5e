//! Route types.
//!
//! A `Route` is one complete path from start to destination composed of
//! ordered segments, each in a single travel mode. Routes are created fresh
//! for every recommendation cycle and are immutable after construction.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

use super::{Cost, DomainError, Location, OptimizationPreference, TravelMode};

/// Identifier for a route within one recommendation response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route id.
    pub fn new(id: impl Into<String>) -> Self {
        RouteId(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A relative classification label for a route.
///
/// Badges are assigned per response, never per route in isolation: whether
/// a route is "quickest" depends on the other candidates it is presented
/// alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    Quickest,
    Cheapest,
    Slowest,
    MostExpensive,
}

impl Badge {
    /// Display label for the badge pill.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Quickest => "Quickest",
            Badge::Cheapest => "Cheapest",
            Badge::Slowest => "Slowest",
            Badge::MostExpensive => "Expensive",
        }
    }

    /// CSS badge class, matching the card styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Badge::Quickest => "badge-primary",
            Badge::Cheapest => "badge-success",
            Badge::Slowest => "badge-warning",
            Badge::MostExpensive => "badge-danger",
        }
    }

    /// Wire name for JSON responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Quickest => "quickest",
            Badge::Cheapest => "cheapest",
            Badge::Slowest => "slowest",
            Badge::MostExpensive => "most_expensive",
        }
    }
}

/// The set of classification badges assigned to one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Badges {
    pub quickest: bool,
    pub cheapest: bool,
    pub slowest: bool,
    pub most_expensive: bool,
}

impl Badges {
    /// No badges.
    pub fn none() -> Self {
        Self::default()
    }

    /// The badges present, in display order.
    pub fn iter(&self) -> impl Iterator<Item = Badge> {
        [
            (self.quickest, Badge::Quickest),
            (self.cheapest, Badge::Cheapest),
            (self.most_expensive, Badge::MostExpensive),
            (self.slowest, Badge::Slowest),
        ]
        .into_iter()
        .filter_map(|(set, badge)| set.then_some(badge))
    }

    /// True if no badge is set.
    pub fn is_empty(&self) -> bool {
        !(self.quickest || self.cheapest || self.slowest || self.most_expensive)
    }
}

/// One leg of a route in a single travel mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    mode: TravelMode,
    duration: Duration,
    cost: Option<Cost>,
    instruction: String,
}

impl RouteSegment {
    /// Construct a segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the duration is negative.
    pub fn new(
        mode: TravelMode,
        duration: Duration,
        cost: Option<Cost>,
        instruction: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if duration < Duration::zero() {
            return Err(DomainError::NegativeDuration);
        }
        Ok(Self {
            mode,
            duration,
            cost,
            instruction: instruction.into(),
        })
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Per-leg cost; `None` for free legs such as walks.
    pub fn cost(&self) -> Option<Cost> {
        self.cost
    }

    /// Free-text instruction, e.g. "Take the 545 bus to Montlake".
    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

/// A complete route from start to destination.
///
/// # Invariants
///
/// - At least one segment
/// - End time equals start time plus the sum of segment durations
/// - Total cost is the sum of segment costs
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: RouteId,
    segments: Vec<RouteSegment>,
    start_time: NaiveDateTime,
    badges: Badges,
}

impl Route {
    /// Construct a route from its segments.
    ///
    /// Totals are derived from the segments, so they cannot disagree with
    /// the leg breakdown.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `segments` is empty.
    pub fn new(
        id: RouteId,
        segments: Vec<RouteSegment>,
        start_time: NaiveDateTime,
        badges: Badges,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        Ok(Self {
            id,
            segments,
            start_time,
            badges,
        })
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn badges(&self) -> Badges {
        self.badges
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// End time, derived from start time and segment durations.
    pub fn end_time(&self) -> NaiveDateTime {
        self.start_time + self.total_duration()
    }

    /// Total duration across all segments.
    pub fn total_duration(&self) -> Duration {
        self.segments
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.duration())
    }

    /// Total cost across all segments.
    pub fn total_cost(&self) -> Cost {
        self.segments.iter().filter_map(|s| s.cost()).sum()
    }
}

/// A request for trip recommendations between two resolved locations.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub start: Location,
    pub dest: Location,
    pub optimise_for: OptimizationPreference,
}

/// Routes for one request, ranked per the requested preference.
#[derive(Debug, Clone)]
pub struct RecommendationResponse {
    routes: Vec<Route>,
}

impl RecommendationResponse {
    /// Construct a response from ranked routes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if two routes share an id.
    pub fn new(routes: Vec<Route>) -> Result<Self, DomainError> {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.id() == route.id()) {
                return Err(DomainError::DuplicateRouteId(route.id().clone()));
            }
        }
        Ok(Self { routes })
    }

    /// The ranked routes, best first.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Look up one route by id.
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id() == id)
    }
}
