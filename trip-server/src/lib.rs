//! Trip planner server.
//!
//! A web application that answers: "how should I get from here to there,
//! and what will it cost me?"

pub mod cache;
pub mod domain;
pub mod geocode;
pub mod recommend;
pub mod trip;
pub mod web;
