use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The twelve zodiac signs, in zodiac order starting at Aries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Classical element of a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Angular relationship between two signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Conjunction,
    SemiSextile,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

/// A sign name that isn't one of the twelve
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sign: {0:?}")]
pub struct ParseSignError(pub String);

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Position in the zodiac, 0 (Aries) to 11 (Pisces)
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Elements cycle Fire, Earth, Air, Water around the wheel
    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Sign::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSignError(s.to_string()))
    }
}

impl TryFrom<String> for Sign {
    type Error = ParseSignError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sign> for String {
    fn from(sign: Sign) -> Self {
        sign.name().to_string()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Aspect {
    /// Aspect formed by two signs, from the shorter distance around the wheel
    pub fn between(a: Sign, b: Sign) -> Self {
        let diff = (a.index() as i8 - b.index() as i8).unsigned_abs();
        match diff.min(12 - diff) {
            0 => Aspect::Conjunction,
            1 => Aspect::SemiSextile,
            2 => Aspect::Sextile,
            3 => Aspect::Square,
            4 => Aspect::Trine,
            5 => Aspect::Quincunx,
            _ => Aspect::Opposition,
        }
    }

    /// Compatibility contributed by this aspect (0-1)
    #[inline]
    pub fn affinity(self) -> f64 {
        match self {
            Aspect::Conjunction => 1.0,
            Aspect::Trine => 0.9,
            Aspect::Sextile => 0.7,
            Aspect::Opposition => 0.5,
            Aspect::SemiSextile | Aspect::Quincunx => 0.3,
            Aspect::Square => 0.2,
        }
    }
}
