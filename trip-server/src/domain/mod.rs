//! Domain types for the trip recommendation server.
//!
//! This module contains the core domain model types that represent
//! validated trip data. Types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod location;
mod mode;
mod money;
mod preference;
mod route;

pub use error::DomainError;
pub use location::{InvalidCoordinates, Location};
pub use mode::TravelMode;
pub use money::Cost;
pub use preference::OptimizationPreference;
pub use route::{
    Badge, Badges, RecommendationRequest, RecommendationResponse, Route, RouteId, RouteSegment,
};
