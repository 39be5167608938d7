//! Scorer configuration: fuzzy-match settings and alias overrides.
//!
//! Resolution order for the threshold, lowest to highest precedence:
//! built-in default, config file, `OPFL_FUZZY_THRESHOLD`, then whatever the
//! caller applies on top (the CLI's `--threshold`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::aliases::{AliasOverrides, AliasTable};
use crate::core::io::try_read_to_string;
use crate::error::{OpflError, Result};

pub const THRESHOLD_ENV_VAR: &str = "OPFL_FUZZY_THRESHOLD";
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// How to choose among fuzzy candidates that share the top similarity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Longest common prefix with the query wins, then index order.
    #[default]
    PrefixThenOrder,
    /// Index order only.
    FirstEncountered,
}

/// Settings handed to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub tie_break: TieBreak,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl MatchConfig {
    pub fn new(threshold: f64) -> Result<Self> {
        let config = Self {
            threshold,
            tie_break: TieBreak::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(OpflError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            tie_break: TieBreak::default(),
        }
    }
}

/// On-disk configuration file.
///
/// ```json
/// {
///   "matching": { "threshold": 0.8, "tie_break": "first_encountered" },
///   "aliases": { "team_codes": { "WSH": "WAS" }, "defense_names": {} }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchConfig,
    #[serde(default)]
    pub aliases: AliasOverrides,
}

impl Config {
    /// Load from `path`, or from [`default_config_path`] when it exists, or
    /// fall back to defaults. The env override is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let raw = try_read_to_string(p)?.ok_or_else(|| OpflError::MissingInput {
                    what: format!("config file {}", p.display()),
                })?;
                Self::from_json(&raw)?
            }
            None => match try_read_to_string(&default_config_path())? {
                Some(raw) => Self::from_json(&raw)?,
                None => Self::default(),
            },
        };

        if let Some(threshold) = threshold_from_env()? {
            log::debug!("{} overrides threshold to {}", THRESHOLD_ENV_VAR, threshold);
            config.matching.threshold = threshold;
        }
        config.matching.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.matching.validate()?;
        Ok(config)
    }

    pub fn alias_table(&self) -> AliasTable {
        AliasTable::with_overrides(&self.aliases)
    }
}

/// Path: ~/.config/opfl-scorer/config.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("opfl-scorer").join("config.json")
}

fn threshold_from_env() -> Result<Option<f64>> {
    match std::env::var(THRESHOLD_ENV_VAR) {
        Ok(raw) => {
            let value: f64 = raw.trim().parse().map_err(|_| OpflError::InvalidConfig {
                message: format!("{} is not a number: {:?}", THRESHOLD_ENV_VAR, raw),
            })?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
