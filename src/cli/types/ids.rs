//! Team identifiers.

use crate::error::{OpflError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFL team abbreviation, always stored upper-cased (e.g. `KC`, `NYJ`).
///
/// Construction only normalizes case. Mapping historical variants such as
/// `LAR` or `JAC` onto their canonical codes is the job of
/// [`AliasTable`](crate::core::aliases::AliasTable).
///
/// # Examples
///
/// ```rust
/// use opfl_scorer::TeamCode;
///
/// let code: TeamCode = "chi".parse().unwrap();
/// assert_eq!(code.as_str(), "CHI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TeamCode(String);

impl TeamCode {
    /// Trim and upper-case without validating. Untrusted input goes through
    /// [`FromStr`] instead.
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamCode {
    type Err = OpflError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let valid = (2..=3).contains(&trimmed.len())
            && trimmed.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(OpflError::InvalidTeamCode {
                code: s.to_string(),
            });
        }
        Ok(Self::new(trimmed))
    }
}

impl<'de> Deserialize<'de> for TeamCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Name of a fantasy team in the league, e.g. `"KIRK/DAVID (11)"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FantasyTeamName(pub String);

impl FantasyTeamName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FantasyTeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
