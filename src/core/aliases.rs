//! Team-code aliasing.
//!
//! League sheets have used several abbreviations over the years that differ
//! from the codes the stats feed publishes. [`AliasTable`] folds those variants
//! onto the canonical code and also knows the bare city/team names that
//! defenses are listed under.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cli::types::TeamCode;

/// Variant codes seen on league sheets, mapped to the stats feed's code.
const DEFAULT_CODE_ALIASES: &[(&str, &str)] = &[("LAR", "LA"), ("JAC", "JAX"), ("ARZ", "ARI")];

/// Names a team defense may be listed under.
const DEFAULT_DEFENSE_NAMES: &[(&str, &str)] = &[
    ("Arizona", "ARI"),
    ("Atlanta", "ATL"),
    ("Baltimore", "BAL"),
    ("Buffalo", "BUF"),
    ("Carolina", "CAR"),
    ("Chicago", "CHI"),
    ("Cincinnati", "CIN"),
    ("Cleveland", "CLE"),
    ("Dallas", "DAL"),
    ("Denver", "DEN"),
    ("Detroit", "DET"),
    ("Green Bay", "GB"),
    ("Houston", "HOU"),
    ("Indianapolis", "IND"),
    ("Jacksonville", "JAX"),
    ("Kansas City", "KC"),
    ("Las Vegas", "LV"),
    ("LA Chargers", "LAC"),
    ("LA Rams", "LA"),
    ("Los Angeles Chargers", "LAC"),
    ("Los Angeles Rams", "LA"),
    ("Miami", "MIA"),
    ("Minnesota", "MIN"),
    ("New England", "NE"),
    ("New Orleans", "NO"),
    ("NY Giants", "NYG"),
    ("NY Jets", "NYJ"),
    ("New York Giants", "NYG"),
    ("New York Jets", "NYJ"),
    ("Philadelphia", "PHI"),
    ("Pittsburgh", "PIT"),
    ("San Francisco", "SF"),
    ("Seattle", "SEA"),
    ("Tampa Bay", "TB"),
    ("Tennessee", "TEN"),
    ("Washington", "WAS"),
];

/// Extra pairs layered on top of the built-in tables, as read from config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasOverrides {
    #[serde(default)]
    pub team_codes: HashMap<String, String>,
    #[serde(default)]
    pub defense_names: HashMap<String, String>,
}

/// Immutable lookup from variant team codes (and defense names) to
/// canonical [`TeamCode`]s. Keys are compared case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    codes: HashMap<String, TeamCode>,
    defense_names: HashMap<String, TeamCode>,
}

impl AliasTable {
    /// An empty table: every code maps to itself.
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
            defense_names: HashMap::new(),
        }
    }

    /// Build from explicit pairs.
    pub fn from_pairs<'a, I, J>(codes: I, defense_names: J) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
        J: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::empty();
        for (variant, canonical) in codes {
            table.insert_code(variant, canonical);
        }
        for (name, canonical) in defense_names {
            table.insert_defense_name(name, canonical);
        }
        table
    }

    /// Built-in tables plus whatever the config adds. Config entries win.
    pub fn with_overrides(overrides: &AliasOverrides) -> Self {
        let mut table = Self::default();
        for (variant, canonical) in &overrides.team_codes {
            table.insert_code(variant, canonical);
        }
        for (name, canonical) in &overrides.defense_names {
            table.insert_defense_name(name, canonical);
        }
        table
    }

    fn insert_code(&mut self, variant: &str, canonical: &str) {
        self.codes
            .insert(variant.trim().to_uppercase(), TeamCode::new(canonical));
    }

    fn insert_defense_name(&mut self, name: &str, canonical: &str) {
        self.defense_names
            .insert(fold_name(name), TeamCode::new(canonical));
    }

    /// Canonical code for `code`, or `code` itself (upper-cased) when it is
    /// not a known variant.
    pub fn canonical(&self, code: &TeamCode) -> TeamCode {
        self.codes
            .get(code.as_str())
            .cloned()
            .unwrap_or_else(|| code.clone())
    }

    /// Same as [`canonical`](Self::canonical) for a raw string; `None` for blank input.
    pub fn canonical_str(&self, code: &str) -> Option<TeamCode> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.canonical(&TeamCode::new(trimmed)))
    }

    /// Team code a defense is listed under, e.g. `"Green Bay"` -> `GB`.
    pub fn defense_team(&self, name: &str) -> Option<TeamCode> {
        self.defense_names.get(&fold_name(name)).cloned()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::from_pairs(
            DEFAULT_CODE_ALIASES.iter().copied(),
            DEFAULT_DEFENSE_NAMES.iter().copied(),
        )
    }
}

fn fold_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
