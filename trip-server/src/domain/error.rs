//! Domain-level error types.

use super::RouteId;

/// Errors raised when constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A route must contain at least one segment.
    #[error("route has no segments")]
    EmptyRoute,

    /// A segment duration was negative.
    #[error("segment duration is negative")]
    NegativeDuration,

    /// A duplicate route identifier appeared in one response.
    #[error("duplicate route id: {0}")]
    DuplicateRouteId(RouteId),
}
