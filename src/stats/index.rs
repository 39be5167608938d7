use std::collections::BTreeMap;

use crate::cli::types::{Season, TeamCode, Week};
use crate::stats::StatLine;

/// Read-only store of stat lines, keyed for (team, season, week) lookup.
///
/// Records keep the order they were inserted in; that order is the
/// "first encountered" order the resolver's tie-break falls back to.
#[derive(Debug, Clone, Default)]
pub struct StatsIndex {
    lines: Vec<StatLine>,
    by_team: BTreeMap<(Season, Week, TeamCode), Vec<usize>>,
    by_week: BTreeMap<(Season, Week), Vec<usize>>,
}

impl StatsIndex {
    pub fn new(lines: Vec<StatLine>) -> Self {
        let mut by_team: BTreeMap<(Season, Week, TeamCode), Vec<usize>> = BTreeMap::new();
        let mut by_week: BTreeMap<(Season, Week), Vec<usize>> = BTreeMap::new();

        for (i, line) in lines.iter().enumerate() {
            by_team
                .entry((line.season, line.week, line.team.clone()))
                .or_default()
                .push(i);
            by_week.entry((line.season, line.week)).or_default().push(i);
        }

        Self {
            lines,
            by_team,
            by_week,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Records for one team in one week, in index order.
    pub fn team_week(&self, team: &TeamCode, season: Season, week: Week) -> Vec<&StatLine> {
        self.by_team
            .get(&(season, week, team.clone()))
            .map(|ids| ids.iter().map(|&i| &self.lines[i]).collect())
            .unwrap_or_default()
    }

    /// Narrow the index to a single week.
    pub fn week(&self, season: Season, week: Week) -> WeekView<'_> {
        WeekView {
            index: self,
            season,
            week,
        }
    }
}

impl FromIterator<StatLine> for StatsIndex {
    fn from_iter<I: IntoIterator<Item = StatLine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Borrowed view of one (season, week) slice of a [`StatsIndex`].
#[derive(Debug, Clone, Copy)]
pub struct WeekView<'a> {
    index: &'a StatsIndex,
    season: Season,
    week: Week,
}

impl<'a> WeekView<'a> {
    pub fn season(&self) -> Season {
        self.season
    }

    pub fn week(&self) -> Week {
        self.week
    }

    /// This week's records for `team`, in index order.
    pub fn team(&self, team: &TeamCode) -> Vec<&'a StatLine> {
        self.index.team_week(team, self.season, self.week)
    }

    /// Every record for this week across all teams, in index order.
    pub fn all(&self) -> Vec<&'a StatLine> {
        let index = self.index;
        index
            .by_week
            .get(&(self.season, self.week))
            .map(|ids| ids.iter().map(|&i| &index.lines[i]).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        !self.index.by_week.contains_key(&(self.season, self.week))
    }
}
