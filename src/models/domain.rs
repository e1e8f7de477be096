use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::core::zodiac::Sign;

/// The three placements making up a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Sun,
    Moon,
    Rising,
}

impl Placement {
    pub const ALL: [Placement; 3] = [Placement::Sun, Placement::Moon, Placement::Rising];
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Placement::Sun => "sun",
            Placement::Moon => "moon",
            Placement::Rising => "rising",
        })
    }
}

/// Sun, moon and rising signs of one person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub sun: Sign,
    pub moon: Sign,
    pub rising: Sign,
}

impl Chart {
    pub fn new(sun: Sign, moon: Sign, rising: Sign) -> Self {
        Self { sun, moon, rising }
    }

    pub fn sign(&self, placement: Placement) -> Sign {
        match placement {
            Placement::Sun => self.sun,
            Placement::Moon => self.moon,
            Placement::Rising => self.rising,
        }
    }
}

/// A roster entry that can be returned as a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Person {
    #[validate(length(min = 1))]
    pub name: String,
    pub sun: Sign,
    pub moon: Sign,
    pub rising: Sign,
}

impl Person {
    pub fn chart(&self) -> Chart {
        Chart::new(self.sun, self.moon, self.rising)
    }
}

/// Weight of each placement in the compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub sun: f64,
    pub moon: f64,
    pub rising: f64,
}

impl ScoringWeights {
    pub fn for_placement(&self, placement: Placement) -> f64 {
        match placement {
            Placement::Sun => self.sun,
            Placement::Moon => self.moon,
            Placement::Rising => self.rising,
        }
    }

    pub fn total(&self) -> f64 {
        self.sun + self.moon + self.rising
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sun: 0.5,
            moon: 0.3,
            rising: 0.2,
        }
    }
}
