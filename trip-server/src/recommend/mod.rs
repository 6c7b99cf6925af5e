//! Route recommendation: candidate construction, fare estimation, ranking,
//! and relative classification.

mod classify;
mod config;
mod engine;
mod error;
mod fares;

pub use classify::classify_totals;
pub use config::RecommendConfig;
pub use engine::{haversine_km, Recommender};
pub use error::RecommendError;
pub use fares::{FareSchedule, LYFT, UBER};
