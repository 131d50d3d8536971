use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
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

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// Largest team x opportunity cross product the ranker will score
    #[serde(default = "default_max_pairs")]
    pub max_pairs: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_pairs: default_max_pairs(),
        }
    }
}

fn default_limit() -> usize { crate::core::DEFAULT_TOP_MATCHES }
fn default_max_limit() -> usize { 100 }
fn default_max_pairs() -> usize { 100_000 }

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and cap
    pub fn resolve_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    /// TOML file replacing the built-in industry, skill and experience tables
    pub tables_path: Option<String>,
    /// Fixes the market intelligence selection, for reproducible output
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_industry_weight")]
    pub industry: f64,
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_compensation_weight")]
    pub compensation: f64,
    #[serde(default = "default_size_weight")]
    pub size: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            industry: default_industry_weight(),
            skills: default_skills_weight(),
            compensation: default_compensation_weight(),
            size: default_size_weight(),
            location: default_location_weight(),
            experience: default_experience_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            industry: config.industry,
            skills: config.skills,
            compensation: config.compensation,
            size: config.size,
            location: config.location,
            experience: config.experience,
        }
    }
}

fn default_industry_weight() -> f64 { 0.25 }
fn default_skills_weight() -> f64 { 0.30 }
fn default_compensation_weight() -> f64 { 0.20 }
fn default_size_weight() -> f64 { 0.10 }
fn default_location_weight() -> f64 { 0.10 }
fn default_experience_weight() -> f64 { 0.05 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LIFTOUT_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LIFTOUT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("LIFTOUT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
