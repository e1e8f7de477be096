// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Chart, Person, Placement, ScoringWeights};
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchResponse};
