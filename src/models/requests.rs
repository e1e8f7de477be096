use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for `POST /results`
///
/// Only a JSON object is accepted, and all three keys are required; sign
/// names are passed to the matcher as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct MatchRequest {
    pub sun: String,
    pub moon: String,
    pub rising: String,
}

#[derive(Deserialize)]
struct MatchFields {
    sun: String,
    moon: String,
    rising: String,
}

impl TryFrom<Map<String, Value>> for MatchRequest {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let MatchFields { sun, moon, rising } = serde_json::from_value(Value::Object(object))?;
        Ok(Self { sun, moon, rising })
    }
}
