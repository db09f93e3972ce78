use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 5 }
fn default_max_limit() -> u16 { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_product_weight")]
    pub product: f64,
    #[serde(default = "default_sector_weight")]
    pub sector: f64,
    #[serde(default = "default_geography_weight")]
    pub geography: f64,
    #[serde(default = "default_certifications_weight")]
    pub certifications: f64,
    #[serde(default = "default_size_weight")]
    pub size: f64,
    #[serde(default = "default_export_weight")]
    pub export: f64,
    #[serde(default = "default_partnership_weight")]
    pub partnership: f64,
    #[serde(default = "default_activity_weight")]
    pub activity: f64,
    #[serde(default = "default_activity_credit")]
    pub activity_credit: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            product: default_product_weight(),
            sector: default_sector_weight(),
            geography: default_geography_weight(),
            certifications: default_certifications_weight(),
            size: default_size_weight(),
            export: default_export_weight(),
            partnership: default_partnership_weight(),
            activity: default_activity_weight(),
            activity_credit: default_activity_credit(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            product: config.product,
            sector: config.sector,
            geography: config.geography,
            certifications: config.certifications,
            size: config.size,
            export: config.export,
            partnership: config.partnership,
            activity: config.activity,
            activity_credit: config.activity_credit,
        }
    }
}

fn default_product_weight() -> f64 { 35.0 }
fn default_sector_weight() -> f64 { 15.0 }
fn default_geography_weight() -> f64 { 10.0 }
fn default_certifications_weight() -> f64 { 10.0 }
fn default_size_weight() -> f64 { 5.0 }
fn default_export_weight() -> f64 { 5.0 }
fn default_partnership_weight() -> f64 { 10.0 }
fn default_activity_weight() -> f64 { 10.0 }
fn default_activity_credit() -> f64 { 0.8 }

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    #[serde(default)]
    pub seed_demo: bool,
    #[serde(default = "default_true")]
    pub enforce_vocabulary: bool,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            seed_demo: false,
            enforce_vocabulary: true,
        }
    }
}

fn default_true() -> bool { true }

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
    /// 4. Environment variables (prefixed with MATCHMAKER__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHMAKER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MATCHMAKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MATCHMAKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject weights and limits the scorer cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = ScoringWeights::from(&self.scoring.weights);
        let all = [
            weights.product,
            weights.sector,
            weights.geography,
            weights.certifications,
            weights.size,
            weights.export,
            weights.partnership,
            weights.activity,
        ];

        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Message(
                "scoring weights must be finite and non-negative".to_string(),
            ));
        }

        if (weights.total() - 100.0).abs() > 1e-6 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 100, got {}",
                weights.total()
            )));
        }

        if !(0.0..=1.0).contains(&weights.activity_credit) {
            return Err(ConfigError::Message(
                "scoring.weights.activity_credit must be between 0 and 1".to_string(),
            ));
        }

        if self.matching.default_limit > self.matching.max_limit {
            return Err(ConfigError::Message(format!(
                "matching.default_limit ({}) exceeds matching.max_limit ({})",
                self.matching.default_limit, self.matching.max_limit
            )));
        }

        Ok(())
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_settings() -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            matching: MatchingSettings::default(),
            scoring: ScoringSettings::default(),
            registry: RegistrySettings::default(),
            logging: LoggingSettings::default(),
        }
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::from(&WeightsConfig::default());
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_defaults_validate() {
        assert!(create_settings().validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_100() {
        let mut settings = create_settings();
        settings.scoring.weights.product = 40.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_activity_credit_range() {
        let mut settings = create_settings();
        settings.scoring.weights.activity_credit = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_default_limit_within_max() {
        let mut settings = create_settings();
        settings.matching.default_limit = 60;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_shipped_config_file() {
        let raw = include_str!("../config/default.toml");
        let settings: Settings = toml::from_str(raw).unwrap();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.weights(), ScoringWeights::default());
        assert!(settings.registry.enforce_vocabulary);
    }
}
