//! Simulator configuration with TOML file support.

use permchain_types::LedgerParams;
use permchain_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config not serializable: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A participant to create before the scenario starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSpec {
    pub name: String,
    #[serde(default)]
    pub balance: u64,
}

/// One scripted action, referring to participants by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Transfer { from: String, to: String, amount: u64 },
    Ban { name: String },
    Unban { name: String },
}

/// Configuration for a simulation run.
///
/// Loaded from a TOML file via [`SimConfig::from_toml_file`] or built in
/// code. Every field has a default, so an empty file is a valid scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed for voter randomness. Absent means fresh entropy every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default)]
    pub params: LedgerParams,

    #[serde(default = "default_participants")]
    pub participants: Vec<ParticipantSpec>,

    #[serde(default = "default_steps")]
    pub steps: Vec<Step>,
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_participants() -> Vec<ParticipantSpec> {
    [("alice", 50), ("bob", 10), ("carol", 10), ("dave", 10), ("erin", 10)]
        .into_iter()
        .map(|(name, balance)| ParticipantSpec {
            name: name.to_string(),
            balance,
        })
        .collect()
}

fn default_steps() -> Vec<Step> {
    vec![
        Step::Transfer {
            from: "alice".into(),
            to: "bob".into(),
            amount: 20,
        },
        Step::Transfer {
            from: "bob".into(),
            to: "carol".into(),
            amount: 15,
        },
        Step::Transfer {
            from: "carol".into(),
            to: "alice".into(),
            amount: 1000,
        },
    ]
}

impl SimConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log_format: default_log_format(),
            log_level: default_log_level(),
            seed: None,
            params: LedgerParams::default(),
            participants: default_participants(),
            steps: default_steps(),
        }
    }
}
