use crate::models::Person;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Roster shipped with the binary, used when no roster file is configured
const BUILTIN_ROSTER: &str = include_str!("../../data/roster.toml");

/// Errors that can occur while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid roster entry: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("Duplicate roster entry: {0}")]
    Duplicate(String),
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(rename = "person", default)]
    people: Vec<Person>,
}

/// The people a chart can be matched against
///
/// Names are non-empty and unique. Entry order is preserved.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(people.len());
        for person in &people {
            person.validate()?;
            if !seen.insert(person.name.as_str()) {
                return Err(RosterError::Duplicate(person.name.clone()));
            }
        }

        Ok(Self { people })
    }

    /// Parse a roster from TOML made of `[[person]]` tables
    pub fn from_toml_str(source: &str) -> Result<Self, RosterError> {
        let file: RosterFile = toml::from_str(source)?;
        Self::new(file.people)
    }

    /// Load a roster file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn builtin() -> Result<Self, RosterError> {
        Self::from_toml_str(BUILTIN_ROSTER)
    }

    /// Load the configured roster file, or the built-in one when unset
    pub fn load_or_builtin(path: Option<&str>) -> Result<Self, RosterError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
