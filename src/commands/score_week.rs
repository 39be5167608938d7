//! Score one week of fantasy rosters end to end.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::{
    commands::common::{load_rosters, validate_rosters, ScoringContext, ValidRoster},
    resolve::{MatchKind, Resolver},
    roster::FantasyRoster,
    scoring::{score, Breakdown, ScoreResult},
    standings::{rank_standings, TeamScores, TeamStanding},
    Result, Season, Week,
};

/// Options for [`handle_score_week`].
///
/// # Examples
///
/// ```rust
/// use opfl_scorer::{Season, Week, commands::score_week::ScoreWeekParams};
/// use std::path::PathBuf;
///
/// let params = ScoreWeekParams {
///     roster_path: PathBuf::from("rosters.json"),
///     stats_path: PathBuf::from("week12.json"),
///     season: Season::new(2025),
///     week: Week::new(12),
///     threshold: None,
///     config_path: None,
///     as_json: false,
///     show_breakdown: true,
/// };
/// assert_eq!(params.week.as_u16(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct ScoreWeekParams {
    pub roster_path: PathBuf,
    pub stats_path: PathBuf,
    pub season: Season,
    pub week: Week,
    /// Overrides the configured fuzzy threshold.
    pub threshold: Option<f64>,
    pub config_path: Option<PathBuf>,
    pub as_json: bool,
    pub show_breakdown: bool,
}

/// Everything a week's run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekReport {
    pub season: Season,
    pub week: Week,
    pub teams: Vec<TeamScores>,
    pub standings: Vec<TeamStanding>,
    /// Raw entries dropped as malformed.
    pub skipped_entries: usize,
}

/// Load inputs, score the week and print the report.
///
/// # Errors
///
/// Fails only on unreadable inputs or invalid configuration. Individual
/// entries never fail the run.
pub fn handle_score_week(params: ScoreWeekParams) -> Result<()> {
    let ctx = ScoringContext::load(
        params.config_path.as_deref(),
        &params.stats_path,
        params.threshold,
    )?;
    let rosters = load_rosters(&params.roster_path)?;

    let report = score_week(&ctx, &rosters, params.season, params.week);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        print!("{}", render_text(&report, params.show_breakdown)); // tarpaulin::skip
    }
    Ok(())
}

/// Resolve, score and rank every roster against one week of stats.
pub fn score_week(ctx: &ScoringContext, rosters: &[FantasyRoster], season: Season, week: Week) -> WeekReport {
    let (valid, skipped_entries) = validate_rosters(rosters, &ctx.aliases);
    let view = ctx.index.week(season, week);
    if view.is_empty() {
        log::warn!("no stat lines for season {} week {}", season, week);
    }

    let resolver = Resolver::new(&ctx.aliases, ctx.matching);
    let teams: Vec<TeamScores> = valid
        .into_iter()
        .map(|ValidRoster { name, entries }| {
            // collect() on an indexed parallel iterator keeps input order
            let results: Vec<ScoreResult> = entries
                .par_iter()
                .map(|entry| score(resolver.resolve(entry, &view)))
                .collect();
            TeamScores::new(name, results)
        })
        .collect();

    let standings = rank_standings(&teams);
    let unresolved: usize = standings.iter().map(|s| s.unresolved_starters).sum();
    log::info!(
        "scored {} teams for {} week {} ({} unresolved starters, {} skipped entries)",
        teams.len(),
        season,
        week,
        unresolved,
        skipped_entries
    );

    WeekReport {
        season,
        week,
        teams,
        standings,
        skipped_entries,
    }
}

/// Plain-text report: each team's entries, then the standings.
pub fn render_text(report: &WeekReport, show_breakdown: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "OPFL {} week {}", report.season, report.week);

    for team in &report.teams {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", team.team);
        for result in &team.results {
            let _ = writeln!(out, "  {}", format_result(result));
            if show_breakdown {
                if let Some(line) = format_breakdown(&result.breakdown) {
                    let _ = writeln!(out, "        {}", line);
                }
            }
        }
        let _ = writeln!(out, "  Total: {}", team.total());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Standings");
    for s in &report.standings {
        let unresolved = match s.unresolved_starters {
            0 => String::new(),
            1 => "  (1 unresolved starter)".to_string(),
            n => format!("  ({} unresolved starters)", n),
        };
        let _ = writeln!(out, "  {:>2}. {:<28} {:>4}{}", s.rank, s.team.as_str(), s.total, unresolved);
    }
    if report.skipped_entries > 0 {
        let _ = writeln!(out, "\n{} malformed entries skipped", report.skipped_entries);
    }
    out
}

/// One entry line, e.g. `* RB  TreVeyon Henderson (NE)  ?  12  -> Tre'Veon Henderson (0.89)`.
pub fn format_result(result: &ScoreResult) -> String {
    let entry = result.entry();
    let star = if entry.started { "*" } else { " " };
    let mut line = format!(
        "{} {:<2}  {:<30} {} {:>3}",
        star,
        entry.position.to_string(),
        entry.label(),
        result.match_kind().indicator(),
        result.total
    );

    let res = &result.resolution;
    if res.kind == MatchKind::NotFound {
        line.push_str("  (no stats)");
    } else if res.name_differs() || res.cross_team {
        if let Some(matched) = &res.matched_name {
            let _ = write!(line, "  -> {}", matched);
        }
        if let Some(stat_line) = &res.stat_line {
            if res.cross_team {
                let _ = write!(line, " [{}]", stat_line.team);
            }
        }
        if let Some(score) = res.similarity {
            let _ = write!(line, " ({:.2})", score);
        }
    }
    line
}

/// `None` for unscored entries.
pub fn format_breakdown(breakdown: &Breakdown) -> Option<String> {
    match breakdown {
        Breakdown::Unscored => None,
        Breakdown::Scored { items, floor_applied } => {
            let mut parts: Vec<String> = items
                .iter()
                .map(|c| format!("{} {:+}", c.category, c.points))
                .collect();
            if *floor_applied {
                parts.push("floored at 0".to_string());
            }
            Some(parts.join(", "))
        }
    }
}
