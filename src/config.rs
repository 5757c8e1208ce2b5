use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_interest_weight")]
    pub interest: f64,
    #[serde(default = "default_mentor_load_weight")]
    pub mentor_load: f64,
    #[serde(default = "default_style_weight")]
    pub style: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            interest: default_interest_weight(),
            mentor_load: default_mentor_load_weight(),
            style: default_style_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 40.0 }
fn default_interest_weight() -> f64 { 20.0 }
fn default_mentor_load_weight() -> f64 { 25.0 }
fn default_style_weight() -> f64 { 15.0 }

impl WeightsConfig {
    /// Convert to scoring weights, rejecting negative weights or a total other than 100
    pub fn to_weights(&self) -> Result<ScoringWeights, ConfigError> {
        let weights = ScoringWeights {
            skill: self.skill,
            interest: self.interest,
            mentor_load: self.mentor_load,
            style: self.style,
        };

        let all = [weights.skill, weights.interest, weights.mentor_load, weights.style];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Message(format!(
                "scoring weights must be non-negative, got {:?}",
                all
            )));
        }

        if (weights.sum() - 100.0).abs() > 1e-6 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 100, got {}",
                weights.sum()
            )));
        }

        Ok(weights)
    }
}

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
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MENTOR_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_MATCH__SCORING__WEIGHTS__SKILL -> scoring.weights.skill
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

    /// Scoring weights, validated
    pub fn weights(&self) -> Result<ScoringWeights, ConfigError> {
        self.scoring.weights.to_weights()
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.weights()?;
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MENTOR_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
