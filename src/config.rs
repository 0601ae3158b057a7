//! Runtime configuration
//!
//! Every field has a default, so an empty or partial TOML file is valid.

use crate::dictionary::RetryPolicy;
use crate::dictionary::cache::DEFAULT_CAPACITY;
use crate::dictionary::lookup::DEFAULT_BASE_URL;
use crate::progress::ProgressThresholds;
use crate::validator::{DEFAULT_MIN_LENGTH, ValidationRules};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    pub base_url: String,
    pub attempt_timeout_ms: u64,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            attempt_timeout_ms: policy.attempt_timeout.as_millis() as u64,
            max_attempts: policy.max_attempts,
            retry_delay_ms: policy.retry_delay.as_millis() as u64,
        }
    }
}

impl DictionaryConfig {
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            attempt_timeout: Duration::from_millis(self.attempt_timeout_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub min_length: usize,
    pub restrict_to_puzzle_letters: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            restrict_to_puzzle_letters: false,
        }
    }
}

impl From<&RulesConfig> for ValidationRules {
    fn from(config: &RulesConfig) -> Self {
        Self {
            min_length: config.min_length,
            restrict_to_puzzle_letters: config.restrict_to_puzzle_letters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub clue_thresholds: Vec<f64>,
    pub final_threshold: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        let defaults = ProgressThresholds::default();
        Self {
            clue_thresholds: defaults.clues,
            final_threshold: defaults.final_challenge,
        }
    }
}

impl From<&ProgressConfig> for ProgressThresholds {
    fn from(config: &ProgressConfig) -> Self {
        Self {
            clues: config.clue_thresholds.clone(),
            final_challenge: config.final_threshold,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub cache: CacheConfig,
    pub rules: RulesConfig,
    pub progress: ProgressConfig,
}

impl Config {
    /// Load and validate a TOML config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML, or
    /// fails [`Config::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on parse or validation failure.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `max_attempts` or `min_length` is zero
    /// - a threshold lies outside [0, 1]
    /// - clue thresholds are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dictionary.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "dictionary.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.rules.min_length == 0 {
            return Err(ConfigError::Invalid(
                "rules.min_length must be at least 1".to_string(),
            ));
        }

        let in_range = |t: f64| (0.0..=1.0).contains(&t);
        if let Some(bad) = self
            .progress
            .clue_thresholds
            .iter()
            .find(|&&t| !in_range(t))
        {
            return Err(ConfigError::Invalid(format!(
                "clue threshold {bad} is outside [0, 1]"
            )));
        }
        if !in_range(self.progress.final_threshold) {
            return Err(ConfigError::Invalid(format!(
                "final threshold {} is outside [0, 1]",
                self.progress.final_threshold
            )));
        }
        if self
            .progress
            .clue_thresholds
            .windows(2)
            .any(|pair| pair[0] > pair[1])
        {
            return Err(ConfigError::Invalid(
                "clue thresholds must be in ascending order".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.dictionary.attempt_timeout_ms, 5000);
        assert_eq!(config.dictionary.max_attempts, 3);
        assert_eq!(config.dictionary.retry_delay_ms, 1000);
        assert_eq!(config.cache.capacity, 1000);
        assert_eq!(config.rules.min_length, 4);
        assert_eq!(config.progress.clue_thresholds, vec![0.25, 0.40, 0.60, 0.80]);
        assert!((config.progress.final_threshold - 0.90).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r"
            [dictionary]
            max_attempts = 5

            [rules]
            min_length = 5
            ",
        )
        .unwrap();

        assert_eq!(config.dictionary.max_attempts, 5);
        assert_eq!(config.dictionary.retry_delay_ms, 1000);
        assert_eq!(config.rules.min_length, 5);
        assert!(!config.rules.restrict_to_puzzle_letters);

        let policy = config.dictionary.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.attempt_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let err = Config::from_toml("[progress]\nclue_thresholds = [0.5, 1.5]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml("[progress]\nfinal_threshold = -0.1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unsorted_thresholds() {
        let err = Config::from_toml("[progress]\nclue_thresholds = [0.6, 0.4]").unwrap_err();
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn rejects_zero_attempts_and_length() {
        assert!(Config::from_toml("[dictionary]\nmax_attempts = 0").is_err());
        assert!(Config::from_toml("[rules]\nmin_length = 0").is_err());
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!(
            Config::from_toml("[cache\ncapacity = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cache]\ncapacity = 25").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.cache.capacity, 25);

        assert!(matches!(
            Config::load("/definitely/not/here.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn converts_into_component_settings() {
        let config = Config::default();
        let rules = ValidationRules::from(&config.rules);
        assert_eq!(rules, ValidationRules::default());
        let thresholds = ProgressThresholds::from(&config.progress);
        assert_eq!(thresholds, ProgressThresholds::default());
    }
}
