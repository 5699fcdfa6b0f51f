//! Explorer configuration.
//!
//! Every field has a default matching the stock explorer, so an empty TOML
//! document is a valid configuration.

use crate::catalog::FactCategory;
use crate::views::Tab;
use serde::Deserialize;
use std::time::Duration;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse explorer config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level explorer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub trivia: TriviaConfig,

    #[serde(default)]
    pub facts: FactsConfig,

    #[serde(default)]
    pub home: HomeConfig,
}

/// Trivia round timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TriviaConfig {
    /// Countdown length of each round, in ticks.
    #[serde(default = "default_round_seconds")]
    pub round_seconds: u32,

    /// Period between ticks.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl TriviaConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            round_seconds: default_round_seconds(),
            tick_millis: default_tick_millis(),
        }
    }
}

fn default_round_seconds() -> u32 {
    15
}

fn default_tick_millis() -> u64 {
    1000
}

/// Filter tabs offered over the fact grid. "All" is always shown first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FactsConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<FactCategory>,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<FactCategory> {
    vec![FactCategory::Wildlife, FactCategory::Culture]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomeConfig {
    #[serde(default)]
    pub initial_tab: Tab,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Map,
        }
    }
}

impl ExplorerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trivia.round_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "trivia.round_seconds",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.trivia.tick_millis == 0 {
            return Err(ConfigError::Invalid {
                field: "trivia.tick_millis",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
