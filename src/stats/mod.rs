//! Weekly statistic records and the index the resolver searches.
//!
//! A [`StatLine`] is one subject's numbers for one week: an individual player,
//! a team defense, or a head coach's game result. The [`StatsIndex`] is built
//! once by the caller and only read afterwards.

pub mod index;

use serde::{Deserialize, Serialize};

use crate::cli::types::{Season, TeamCode, Week};

pub use index::{StatsIndex, WeekView};


/// One record in the stats feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    /// Display name: player name, team name for defenses, coach name for coaches.
    pub name: String,
    pub team: TeamCode,
    pub season: Season,
    pub week: Week,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    pub stats: StatBlock,
}

impl StatLine {
    pub fn kind(&self) -> RecordKind {
        match self.stats {
            StatBlock::Player(_) => RecordKind::Player,
            StatBlock::Defense(_) => RecordKind::Defense,
            StatBlock::Coach(_) => RecordKind::Coach,
        }
    }
}

/// Which family of stats a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Player,
    Defense,
    Coach,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatBlock {
    Player(PlayerStats),
    Defense(DefenseStats),
    Coach(CoachLine),
}

/// Offensive and kicking numbers for an individual. Missing fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub passing_yards: i32,
    pub rushing_yards: i32,
    pub receiving_yards: i32,
    pub passing_tds: u32,
    pub rushing_tds: u32,
    pub receiving_tds: u32,
    pub two_point_conversions: u32,
    pub interceptions_thrown: u32,
    /// Interceptions thrown that were returned for a touchdown (subset of
    /// `interceptions_thrown`).
    pub pick_sixes: u32,
    pub fumbles_lost: u32,
    /// Lost fumbles returned for a touchdown (subset of `fumbles_lost`).
    pub fumble_sixes: u32,
    pub kicking: KickingStats,
}

/// Kicking attempts by result and distance band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickingStats {
    pub pat_made: u32,
    /// Missed or blocked extra points.
    pub pat_missed: u32,
    pub fg_made_1_29: u32,
    pub fg_made_30_39: u32,
    pub fg_made_40_49: u32,
    pub fg_made_50_plus: u32,
    /// Missed or blocked field goals.
    pub fg_missed: u32,
}

/// Team defense numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseStats {
    pub points_allowed: u32,
    pub interceptions: u32,
    pub fumble_recoveries: u32,
    pub safeties: u32,
    /// Blocked punts and blocked field goals.
    pub blocked_kicks: u32,
    pub blocked_pats: u32,
    pub sacks: u32,
    pub interception_return_tds: u32,
    pub fumble_return_tds: u32,
    pub blocked_kick_tds: u32,
    /// Punt and kickoff return touchdowns. Recorded, never scored.
    pub kick_return_tds: u32,
}

impl DefenseStats {
    /// Touchdowns that count for defense scoring.
    pub fn scoring_tds(&self) -> u32 {
        self.interception_return_tds
            .saturating_add(self.fumble_return_tds)
            .saturating_add(self.blocked_kick_tds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    Home,
    Road,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    Favorite,
    Underdog,
}

/// A head coach's game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachLine {
    pub outcome: Outcome,
    pub venue: Venue,
    pub line: Line,
}

impl CoachLine {
    /// Derive the line from final scores and the point spread.
    ///
    /// `spread` is from this team's perspective: positive means favored.
    /// A missing or pick'em spread counts as favored.
    pub fn from_game(team_score: u32, opponent_score: u32, is_home: bool, spread: Option<f64>) -> Self {
        let outcome = match team_score.cmp(&opponent_score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        let line = match spread {
            Some(s) if s < 0.0 => Line::Underdog,
            _ => Line::Favorite,
        };
        Self {
            outcome,
            venue: if is_home { Venue::Home } else { Venue::Road },
            line,
        }
    }
}
