//! Weekly standings across fantasy teams.

use serde::{Deserialize, Serialize};

use crate::cli::types::FantasyTeamName;
use crate::resolve::MatchKind;
use crate::scoring::ScoreResult;

#[cfg(test)]
mod tests;

/// Every scored entry for one fantasy team, bench included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScores {
    pub team: FantasyTeamName,
    pub results: Vec<ScoreResult>,
}

impl TeamScores {
    pub fn new(team: FantasyTeamName, results: Vec<ScoreResult>) -> Self {
        Self { team, results }
    }

    pub fn starters(&self) -> impl Iterator<Item = &ScoreResult> {
        self.results.iter().filter(|r| r.entry().started)
    }

    /// Sum of started entries only.
    pub fn total(&self) -> i32 {
        self.starters().map(|r| r.total).sum()
    }

    /// Started entries that found no stat line.
    pub fn unresolved_starters(&self) -> usize {
        self.starters()
            .filter(|r| r.match_kind() == MatchKind::NotFound)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: FantasyTeamName,
    pub total: i32,
    /// 1-based.
    pub rank: usize,
    pub unresolved_starters: usize,
}

/// Rank teams by starter total, highest first.
///
/// Teams with equal totals keep their input order and still get distinct
/// sequential ranks. Never fails: empty input yields empty standings.
pub fn rank_standings(teams: &[TeamScores]) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = teams
        .iter()
        .map(|t| TeamStanding {
            team: t.team.clone(),
            total: t.total(),
            rank: 0,
            unresolved_starters: t.unresolved_starters(),
        })
        .collect();

    // sort_by is stable
    standings.sort_by(|a, b| b.total.cmp(&a.total));
    for (i, standing) in standings.iter_mut().enumerate() {
        standing.rank = i + 1;
    }
    standings
}
