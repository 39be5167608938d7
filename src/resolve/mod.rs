//! Roster-entry resolution.
//!
//! League sheets are typed by hand, so names are frequently misspelled and
//! team codes are sometimes stale. [`Resolver::resolve`] runs a staged
//! pipeline and stops at the first stage that produces a match:
//!
//! 1. fold the entry's team code through the [`AliasTable`]
//! 2. **exact**: normalized name equality on that team (defenses and coaches
//!    match by team alone)
//! 3. **partial**: the entry's tokens are a subset of, or a substring of, exactly
//!    one candidate on that team
//! 4. **fuzzy**: best [`Similarity`] score on that team, if it reaches the threshold
//! 5. **last name**: exactly one candidate on that team shares the entry's
//!    last name, which catches nicknames like "Hollywood Brown"
//! 6. **cross-team**: step 4 again across every team that week
//!
//! Entries without a team code run stages 2-5 over the whole week instead.
//! Anything left over is [`MatchKind::NotFound`], which is a normal outcome
//! (bye week, unplayed game) rather than an error.

pub mod normalize;
pub mod similarity;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cli::types::{Position, TeamCode};
use crate::core::aliases::AliasTable;
use crate::core::config::{MatchConfig, TieBreak};
use crate::roster::RosterEntry;
use crate::stats::{RecordKind, StatLine, WeekView};

pub use normalize::{common_prefix_len, normalize_name};
pub use similarity::{JaroWinkler, Similarity, TokenSortRatio};


/// How an entry was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    Exact,
    Partial,
    Fuzzy,
    NotFound,
}

impl MatchKind {
    /// One-character marker for text output.
    pub fn indicator(&self) -> &'static str {
        match self {
            MatchKind::Exact => "✓",
            MatchKind::Partial => "~",
            MatchKind::Fuzzy => "?",
            MatchKind::NotFound => "✗",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchKind::Exact => "exact",
            MatchKind::Partial => "partial",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::NotFound => "not found",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of resolving one roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub entry: RosterEntry,
    /// Team code after alias folding.
    pub resolved_team: Option<TeamCode>,
    pub stat_line: Option<StatLine>,
    pub kind: MatchKind,
    /// Display name of the matched record.
    pub matched_name: Option<String>,
    /// Similarity score for fuzzy matches.
    pub similarity: Option<f64>,
    /// The match came from a different team than the entry declared.
    pub cross_team: bool,
}

impl ResolutionResult {
    fn not_found(entry: &RosterEntry, resolved_team: Option<TeamCode>) -> Self {
        Self {
            entry: entry.clone(),
            resolved_team,
            stat_line: None,
            kind: MatchKind::NotFound,
            matched_name: None,
            similarity: None,
            cross_team: false,
        }
    }

    pub fn is_found(&self) -> bool {
        self.stat_line.is_some()
    }

    /// `true` when the matched name should be shown next to the sheet name.
    pub fn name_differs(&self) -> bool {
        self.matched_name
            .as_deref()
            .is_some_and(|m| m != self.entry.name)
    }
}

/// Which record family a roster position draws from.
pub fn record_kind_for(position: Position) -> RecordKind {
    match position {
        Position::DF => RecordKind::Defense,
        Position::HC => RecordKind::Coach,
        _ => RecordKind::Player,
    }
}

/// Staged matcher. Holds only read-only configuration, so one resolver can
/// be shared across threads.
pub struct Resolver<'a, S: Similarity = TokenSortRatio> {
    aliases: &'a AliasTable,
    config: MatchConfig,
    similarity: S,
}

impl<'a> Resolver<'a, TokenSortRatio> {
    pub fn new(aliases: &'a AliasTable, config: MatchConfig) -> Self {
        Self::with_similarity(aliases, config, TokenSortRatio)
    }
}

impl<'a, S: Similarity> Resolver<'a, S> {
    pub fn with_similarity(aliases: &'a AliasTable, config: MatchConfig, similarity: S) -> Self {
        Self {
            aliases,
            config,
            similarity,
        }
    }

    /// Resolve one entry against one week of stats.
    pub fn resolve(&self, entry: &RosterEntry, week: &WeekView<'_>) -> ResolutionResult {
        let kind = record_kind_for(entry.position);
        let team = self.resolve_team(entry);
        let query = normalize_name(&entry.name);

        let Some(team) = team else {
            // No team to restrict to: the name stages run over the whole week.
            let everyone = of_kind(week.all(), kind);
            return match self.match_by_name(&query, &entry.name, &everyone) {
                Some(found) => found.into_result(entry, None),
                None => self.not_found(entry, None),
            };
        };

        let on_team = of_kind(week.team(&team), kind);

        if kind != RecordKind::Player {
            if let Some(&line) = on_team.first() {
                log::debug!("{}: matched by team {}", entry.label(), team);
                return Found::new(line, MatchKind::Exact, None).into_result(entry, Some(team));
            }
            // Team had no record (bye, unplayed game, wrong code): try the name.
            let everyone = of_kind(week.all(), kind);
            return match self.match_by_name(&query, &entry.name, &everyone) {
                Some(found) => found.into_result(entry, Some(team)),
                None => self.not_found(entry, Some(team)),
            };
        }

        if let Some(found) = self.match_by_name(&query, &entry.name, &on_team) {
            return found.into_result(entry, Some(team));
        }

        let everyone = of_kind(week.all(), kind);
        if let Some(found) = self.fuzzy(&query, &entry.name, &everyone) {
            log::warn!(
                "{}: matched {} on {} via cross-team search (score {:.2})",
                entry.label(),
                found.line.name,
                found.line.team,
                found.similarity.unwrap_or_default()
            );
            return found.into_result(entry, Some(team));
        }

        self.not_found(entry, Some(team))
    }

    fn resolve_team(&self, entry: &RosterEntry) -> Option<TeamCode> {
        match &entry.team {
            Some(code) => Some(self.aliases.canonical(code)),
            None if entry.position == Position::DF => self.aliases.defense_team(&entry.name),
            None => None,
        }
    }

    fn not_found(&self, entry: &RosterEntry, team: Option<TeamCode>) -> ResolutionResult {
        log::debug!("{}: no stat line found", entry.label());
        ResolutionResult::not_found(entry, team)
    }

    /// Exact, then partial, then fuzzy, then last name over one candidate set.
    fn match_by_name<'l>(
        &self,
        query: &str,
        raw_name: &str,
        candidates: &[&'l StatLine],
    ) -> Option<Found<'l>> {
        if query.is_empty() || candidates.is_empty() {
            return None;
        }
        exact(query, candidates)
            .or_else(|| partial(query, candidates))
            .or_else(|| self.fuzzy(query, raw_name, candidates))
            .or_else(|| last_name(query, candidates))
    }

    /// Highest-scoring candidate at or above the threshold.
    fn fuzzy<'l>(&self, query: &str, raw_name: &str, candidates: &[&'l StatLine]) -> Option<Found<'l>> {
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(&'l StatLine, f64, usize)> = None;
        for &line in candidates {
            let score = self.similarity.similarity(raw_name, &line.name);
            if score.is_nan() {
                continue;
            }
            let prefix = common_prefix_len(query, &normalize_name(&line.name));
            let better = match best {
                None => true,
                Some((_, best_score, best_prefix)) => {
                    score > best_score
                        || (score == best_score
                            && self.config.tie_break == TieBreak::PrefixThenOrder
                            && prefix > best_prefix)
                }
            };
            if better {
                best = Some((line, score, prefix));
            }
        }

        let (line, score, _) = best?;
        if score >= self.config.threshold {
            log::debug!("fuzzy match {:?} -> {:?} ({:.3})", raw_name, line.name, score);
            Some(Found::new(line, MatchKind::Fuzzy, Some(score)))
        } else {
            log::debug!(
                "best fuzzy candidate for {:?} was {:?} at {:.3}, below {:.2}",
                raw_name,
                line.name,
                score,
                self.config.threshold
            );
            None
        }
    }
}

/// Resolve one entry with the default similarity.
pub fn resolve(
    entry: &RosterEntry,
    week: &WeekView<'_>,
    aliases: &AliasTable,
    config: &MatchConfig,
) -> ResolutionResult {
    Resolver::new(aliases, *config).resolve(entry, week)
}

struct Found<'l> {
    line: &'l StatLine,
    kind: MatchKind,
    similarity: Option<f64>,
}

impl<'l> Found<'l> {
    fn new(line: &'l StatLine, kind: MatchKind, similarity: Option<f64>) -> Self {
        Self {
            line,
            kind,
            similarity,
        }
    }

    fn into_result(self, entry: &RosterEntry, resolved_team: Option<TeamCode>) -> ResolutionResult {
        let cross_team = resolved_team
            .as_ref()
            .is_some_and(|team| *team != self.line.team);
        ResolutionResult {
            entry: entry.clone(),
            resolved_team,
            stat_line: Some(self.line.clone()),
            kind: self.kind,
            matched_name: Some(self.line.name.clone()),
            similarity: self.similarity,
            cross_team,
        }
    }
}

fn of_kind(lines: Vec<&StatLine>, kind: RecordKind) -> Vec<&StatLine> {
    lines.into_iter().filter(|l| l.kind() == kind).collect()
}

fn exact<'l>(query: &str, candidates: &[&'l StatLine]) -> Option<Found<'l>> {
    candidates
        .iter()
        .find(|line| normalize_name(&line.name) == query)
        .map(|&line| Found::new(line, MatchKind::Exact, None))
}

/// Accepts only when exactly one candidate qualifies.
fn partial<'l>(query: &str, candidates: &[&'l StatLine]) -> Option<Found<'l>> {
    let query_tokens: Vec<&str> = query.split(' ').collect();
    let mut hits = candidates.iter().filter(|line| {
        let name = normalize_name(&line.name);
        let tokens: Vec<&str> = name.split(' ').collect();
        name.contains(query) || query_tokens.iter().all(|q| tokens.contains(q))
    });

    match (hits.next(), hits.next()) {
        (Some(&line), None) => Some(Found::new(line, MatchKind::Partial, None)),
        _ => None,
    }
}

/// Unique surname match. Needs at least a first and last name in the query.
fn last_name<'l>(query: &str, candidates: &[&'l StatLine]) -> Option<Found<'l>> {
    let mut tokens = query.split(' ');
    let last = tokens.next_back()?;
    tokens.next()?;

    let mut hits = candidates
        .iter()
        .filter(|line| normalize_name(&line.name).split(' ').next_back() == Some(last));

    match (hits.next(), hits.next()) {
        (Some(&line), None) => {
            log::debug!("last-name match {:?} -> {:?}", query, line.name);
            Some(Found::new(line, MatchKind::Partial, None))
        }
        _ => None,
    }
}
