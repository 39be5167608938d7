//! Roster entries as read from a league sheet.
//!
//! A [`RawRosterEntry`] is whatever the upstream reader produced; it becomes a
//! validated [`RosterEntry`] through [`RosterEntry::try_from_raw`]. Malformed
//! entries are reported as [`OpflError::MalformedEntry`] so callers can skip
//! them without aborting the run.

use serde::{Deserialize, Serialize};

use crate::cli::types::{FantasyTeamName, Position, TeamCode};
use crate::core::aliases::AliasTable;
use crate::error::{OpflError, Result};

#[cfg(test)]
mod tests;

/// One player (or defense, or coach) slot on a fantasy team's weekly sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub position: Position,
    /// Name exactly as written on the sheet, minus any `(TEAM)` suffix.
    pub name: String,
    /// Team code as written; `None` when the sheet gave none.
    pub team: Option<TeamCode>,
    /// Starred entries count toward the fantasy team's weekly total.
    pub started: bool,
}

impl RosterEntry {
    pub fn new(position: Position, name: &str, team: Option<&str>, started: bool) -> Self {
        Self {
            position,
            name: name.trim().to_string(),
            team: team
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(TeamCode::new),
            started,
        }
    }

    /// Validate an upstream entry.
    ///
    /// An explicit `team` on the raw entry takes precedence over a `(TEAM)`
    /// suffix in the player string.
    pub fn try_from_raw(raw: &RawRosterEntry, aliases: &AliasTable) -> Result<Self> {
        let position: Position = raw.position.parse().map_err(|_| OpflError::MalformedEntry {
            reason: format!("unrecognized position {:?} for {:?}", raw.position, raw.player),
        })?;

        let (name, cell_team) = parse_player_cell(&raw.player, aliases);
        if name.is_empty() {
            return Err(OpflError::MalformedEntry {
                reason: format!("empty player name at position {}", position),
            });
        }

        let team = match raw.team.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(code) => Some(code.parse::<TeamCode>().map_err(|_| {
                OpflError::MalformedEntry {
                    reason: format!("invalid team code {:?} for {:?}", code, name),
                }
            })?),
            None => cell_team,
        };

        Ok(Self {
            position,
            name,
            team,
            started: raw.started,
        })
    }

    /// Label used in logs and text output, e.g. `"Josh Allen (BUF)"`.
    pub fn label(&self) -> String {
        match &self.team {
            Some(team) => format!("{} ({})", self.name, team),
            None => self.name.clone(),
        }
    }
}

/// An entry exactly as supplied by the sheet reader, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRosterEntry {
    pub position: String,
    pub player: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub started: bool,
}

/// A fantasy team and its weekly roster, in sheet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FantasyRoster {
    pub name: FantasyTeamName,
    pub entries: Vec<RawRosterEntry>,
}

/// Split `"Name (TEAM)"` into name and canonical team code.
///
/// Bare defense names (`"Green Bay"`) resolve through the alias table's
/// defense names. Anything else keeps the whole cell as the name.
pub fn parse_player_cell(cell: &str, aliases: &AliasTable) -> (String, Option<TeamCode>) {
    let cell = cell.trim();
    if cell.is_empty() {
        return (String::new(), None);
    }

    if let Some(team) = aliases.defense_team(cell) {
        return (cell.to_string(), Some(team));
    }

    if let Some(stripped) = cell.strip_suffix(')') {
        if let Some(open) = stripped.rfind('(') {
            let name = stripped[..open].trim();
            let code = &stripped[open + 1..];
            if !name.is_empty() {
                if let Ok(team) = code.parse::<TeamCode>() {
                    return (name.to_string(), Some(aliases.canonical(&team)));
                }
            }
        }
    }

    (cell.to_string(), None)
}
