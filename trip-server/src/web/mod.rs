//! Web layer for the trip planner.
//!
//! Provides HTTP endpoints for resolving places and recommending routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
