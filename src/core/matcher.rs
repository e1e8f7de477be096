use crate::core::scoring::calculate_compatibility;
use crate::core::zodiac::Sign;
use crate::models::{Chart, Placement, ScoringWeights};
use crate::services::Roster;
use thiserror::Error;

/// Errors a matcher can report back to the caller
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("unknown {placement} sign: {value:?}")]
    UnknownSign { placement: Placement, value: String },

    #[error("matching failed: {0}")]
    Failed(String),
}

/// Produces an ordered list of matches for a sun/moon/rising triple
///
/// Implementations must be pure: the same inputs always yield the same list.
pub trait MatchMaker: Send + Sync {
    fn make_matches(&self, sun: &str, moon: &str, rising: &str) -> Result<Vec<String>, MatchError>;
}

/// A scored roster entry
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub name: String,
    pub score: f64,
}

/// Roster-based matcher scoring every person by placement aspects
///
/// # Pipeline Stages
/// 1. Parse the requested signs into a chart
/// 2. Score every roster entry against it
/// 3. Drop entries under the minimum score
/// 4. Rank by score, then name, and truncate
#[derive(Debug, Clone)]
pub struct AstroMatcher {
    roster: Roster,
    weights: ScoringWeights,
    limit: usize,
    min_score: f64,
}

impl AstroMatcher {
    pub const DEFAULT_LIMIT: usize = 10;
    pub const DEFAULT_MIN_SCORE: f64 = 50.0;

    pub fn new(roster: Roster, weights: ScoringWeights, limit: usize, min_score: f64) -> Self {
        Self {
            roster,
            weights,
            limit,
            min_score,
        }
    }

    pub fn with_defaults(roster: Roster) -> Self {
        Self::new(
            roster,
            ScoringWeights::default(),
            Self::DEFAULT_LIMIT,
            Self::DEFAULT_MIN_SCORE,
        )
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Score and rank the roster against a parsed chart
    pub fn rank(&self, seeker: &Chart) -> Vec<ScoredMatch> {
        let mut scored: Vec<ScoredMatch> = self
            .roster
            .people()
            .iter()
            .filter_map(|person| {
                let score = calculate_compatibility(seeker, &person.chart(), &self.weights);
                (score >= self.min_score).then(|| ScoredMatch {
                    name: person.name.clone(),
                    score,
                })
            })
            .collect();

        // Sort by score (descending) and then by name (ascending)
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        scored.truncate(self.limit);
        scored
    }
}

impl MatchMaker for AstroMatcher {
    fn make_matches(
        &self,
        sun: &str,
        moon: &str,
        rising: &str,
    ) -> Result<Vec<String>, MatchError> {
        let seeker = Chart::new(
            parse_placement(Placement::Sun, sun)?,
            parse_placement(Placement::Moon, moon)?,
            parse_placement(Placement::Rising, rising)?,
        );

        let ranked = self.rank(&seeker);
        tracing::debug!(
            "Ranked {} of {} roster entries for {:?}",
            ranked.len(),
            self.roster.len(),
            seeker
        );

        Ok(ranked.into_iter().map(|m| m.name).collect())
    }
}

fn parse_placement(placement: Placement, value: &str) -> Result<Sign, MatchError> {
    value.parse().map_err(|_| MatchError::UnknownSign {
        placement,
        value: value.to_string(),
    })
}
