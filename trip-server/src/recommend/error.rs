//! Recommendation engine error types.

use crate::domain::DomainError;

/// Errors from candidate route construction.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    /// No candidate route could be constructed for the trip.
    #[error("no routes could be constructed for this trip")]
    NoRoutes,

    /// A constructed route violated a domain invariant.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
