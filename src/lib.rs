//! Horoscope Matcher - compatibility matching over sun, moon and rising signs
//!
//! This library provides the HTTP surface (`POST /results` with permissive
//! CORS) and the roster-based matcher behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{AstroMatcher, MatchError, MatchMaker, Sign};
pub use error::ApiError;
pub use models::{Chart, MatchRequest, MatchResponse, Person, ScoringWeights};
pub use services::Roster;
