//! Keyword sets driving the string-matching risk rules.
//!
//! Supplied as external TOML configuration so the rule engine can be
//! tuned without touching source; the defaults mirror the shipped lists.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a rule configuration file.
#[derive(Debug, Error)]
pub enum RuleConfigError {
    #[error("failed to read rule config {file}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rule config {file}")]
    Parse {
        file: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Keyword sets for the risk-flag rules. All matching against these lists
/// is case-insensitive substring containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRuleConfig {
    /// Metros that trigger the high-cost-of-living advisory.
    pub high_col_metros: Vec<String>,
    /// Employer-name keywords that mark cyclical-hiring industries.
    pub volatile_industries: Vec<String>,
}

impl Default for RiskRuleConfig {
    fn default() -> Self {
        Self {
            high_col_metros: vec![
                "San Francisco Bay Area".to_string(),
                "New York City".to_string(),
                "Seattle".to_string(),
                "Boston".to_string(),
                "Los Angeles".to_string(),
            ],
            volatile_industries: vec![
                "Technology".to_string(),
                "Startups".to_string(),
                "Media".to_string(),
                "Entertainment".to_string(),
            ],
        }
    }
}

impl RiskRuleConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RuleConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RuleConfigError::Io {
            file: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| RuleConfigError::Parse {
            file: path.display().to_string(),
            source,
        })
    }
}
