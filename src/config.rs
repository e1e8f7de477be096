use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    #[validate(nested)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 4567 }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: usize,
    #[serde(default = "default_min_score")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_score: f64,
    pub roster_path: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub weights: WeightsConfig,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_score: default_min_score(),
            roster_path: None,
            weights: WeightsConfig::default(),
        }
    }
}

fn default_limit() -> usize { 10 }
fn default_min_score() -> f64 { 50.0 }

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_finite_weights"))]
pub struct WeightsConfig {
    #[serde(default = "default_sun_weight")]
    #[validate(range(min = 0.0))]
    pub sun: f64,
    #[serde(default = "default_moon_weight")]
    #[validate(range(min = 0.0))]
    pub moon: f64,
    #[serde(default = "default_rising_weight")]
    #[validate(range(min = 0.0))]
    pub rising: f64,
}

// NaN slips through range checks
fn validate_finite_weights(weights: &WeightsConfig) -> Result<(), ValidationError> {
    if [weights.sun, weights.moon, weights.rising].iter().all(|w| w.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::new("weights_not_finite"))
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            sun: default_sun_weight(),
            moon: default_moon_weight(),
            rising: default_rising_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            sun: config.sun,
            moon: config.moon,
            rising: config.rising,
        }
    }
}

fn default_sun_weight() -> f64 { 0.5 }
fn default_moon_weight() -> f64 { 0.3 }
fn default_rising_weight() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "plain".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOROSCOPE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOROSCOPE__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Parse configuration from a TOML string, without environment overrides
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Settings = settings.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;
        Ok(settings)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.matching.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("HOROSCOPE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.sun, 0.5);
        assert_eq!(weights.moon, 0.3);
        assert_eq!(weights.rising, 0.2);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "plain");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.server.port, 4567);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.matching.limit, 10);
        assert!(settings.matching.roster_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let settings = Settings::from_toml_str(
            r#"
            [server]
            port = 8080

            [matching.weights]
            sun = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        let weights = settings.scoring_weights();
        assert_eq!(weights.sun, 1.0);
        assert_eq!(weights.moon, 0.3);
    }

    #[test]
    fn test_limit_out_of_range() {
        let result = Settings::from_toml_str(
            r#"
            [matching]
            limit = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Settings::from_toml_str(
            r#"
            [matching.weights]
            sun = -5.0
            moon = 1.0
            rising = 4.5
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_weight_rejected() {
        let weights = WeightsConfig {
            moon: f64::NAN,
            ..WeightsConfig::default()
        };
        assert!(weights.validate().is_err());

        let settings = Settings {
            matching: MatchingSettings {
                weights,
                ..MatchingSettings::default()
            },
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_weights_allowed() {
        let weights = WeightsConfig { sun: 0.0, moon: 0.0, rising: 0.0 };
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_min_score_out_of_range() {
        let result = Settings::from_toml_str(
            r#"
            [matching]
            min_score = 150.0
            "#,
        );
        assert!(result.is_err());
    }
}
