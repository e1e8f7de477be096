// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod zodiac;

pub use matcher::{AstroMatcher, MatchError, MatchMaker, ScoredMatch};
pub use scoring::calculate_compatibility;
pub use zodiac::{Aspect, Element, ParseSignError, Sign};
