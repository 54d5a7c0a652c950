//! Quiz generation configuration
//!
//! Handles loading configuration from environment variables and TOML.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::choice::{ChoiceLayout, ChoiceOptions, MAX_CHOICES};
use crate::rng::QuizRng;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown choice layout name
    #[error("Invalid layout: {0}. Must be one of: onepar, list")]
    InvalidLayout(String),

    /// Choice limit outside `2..=26`
    #[error("Invalid max_choices: {0}. Must be between 2 and 26")]
    InvalidMaxChoices(usize),

    /// Unreadable or malformed configuration file
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Settings that control how questions are framed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Choice layout
    #[serde(deserialize_with = "deserialize_layout")]
    pub layout: ChoiceLayout,
    /// Shuffle options before lettering
    pub reorder: bool,
    /// Fixed RNG seed; drawn at random when absent
    pub seed: Option<u64>,
    /// Largest accepted number of options
    pub max_choices: usize,
}

fn deserialize_layout<'de, D>(deserializer: D) -> Result<ChoiceLayout, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ChoiceLayout::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            layout: ChoiceLayout::OnePar,
            reorder: true,
            seed: None,
            max_choices: MAX_CHOICES,
        }
    }
}

impl QuizConfig {
    /// Create a new QuizConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(layout) = std::env::var("EXERCISE_QUIZ_LAYOUT") {
            config.layout = ChoiceLayout::from_str(&layout)?;
        }

        if let Ok(reorder) = std::env::var("EXERCISE_QUIZ_REORDER") {
            config.reorder = parse_bool(&reorder)
                .ok_or_else(|| ConfigError::EnvError(format!("EXERCISE_QUIZ_REORDER={}", reorder)))?;
        }

        if let Ok(seed) = std::env::var("EXERCISE_QUIZ_SEED") {
            let seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("EXERCISE_QUIZ_SEED={}", seed)))?;
            config.seed = Some(seed);
        }

        if let Ok(max) = std::env::var("EXERCISE_QUIZ_MAX_CHOICES") {
            config.max_choices = max
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("EXERCISE_QUIZ_MAX_CHOICES={}", max)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_CHOICES).contains(&self.max_choices) {
            return Err(ConfigError::InvalidMaxChoices(self.max_choices));
        }
        Ok(())
    }

    /// Options for [`crate::choice::build_choice`]
    pub fn choice_options(&self) -> ChoiceOptions {
        ChoiceOptions {
            layout: self.layout,
            reorder: self.reorder,
            max_choices: self.max_choices,
        }
    }

    /// RNG seeded from `seed`, or from a fresh random seed
    pub fn rng(&self) -> QuizRng {
        match self.seed {
            Some(seed) => QuizRng::from_seed(seed),
            None => QuizRng::from_random_seed(),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.layout, ChoiceLayout::OnePar);
        assert!(config.reorder);
        assert_eq!(config.seed, None);
        assert_eq!(config.max_choices, 26);
        assert!(config.validate().is_ok());
        assert_eq!(config.choice_options(), ChoiceOptions::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = QuizConfig::from_toml_str(
            r#"
            layout = "list"
            reorder = false
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.layout, ChoiceLayout::List);
        assert!(!config.reorder);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_choices, 26);
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = QuizConfig::from_toml_str("seed = 7").unwrap();
        assert_eq!(config.layout, ChoiceLayout::OnePar);
        assert!(config.reorder);
        assert_eq!(config.rng().seed(), 7);
    }

    #[test]
    fn test_toml_rejects_bad_layout() {
        let err = QuizConfig::from_toml_str(r#"layout = "grid""#).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_validate_max_choices() {
        let config = QuizConfig {
            max_choices: 27,
            ..QuizConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxChoices(27))
        ));
        assert!(QuizConfig::from_toml_str("max_choices = 1").is_err());
        assert!(QuizConfig::from_toml_str("max_choices = 4").is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = QuizConfig::from_file("/nonexistent/quiz.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_from_env_defaults_without_vars() {
        // Only meaningful when none of the variables are set in the test environment.
        if ["LAYOUT", "REORDER", "SEED", "MAX_CHOICES"]
            .iter()
            .all(|k| std::env::var(format!("EXERCISE_QUIZ_{}", k)).is_err())
        {
            assert_eq!(QuizConfig::from_env().unwrap(), QuizConfig::default());
        }
    }
}
