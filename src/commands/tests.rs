//! Tests for the score-week command

use super::common::*;
use super::score_week::*;
use crate::cli::types::{FantasyTeamName, TeamCode};
use crate::core::config::tests::ENV_LOCK;
use crate::core::config::THRESHOLD_ENV_VAR;
use crate::core::{AliasTable, MatchConfig};
use crate::resolve::MatchKind;
use crate::roster::{FantasyRoster, RawRosterEntry};
use crate::stats::{CoachLine, DefenseStats, PlayerStats, StatBlock, StatLine, StatsIndex};
use crate::{Season, Week};
use std::io::Write;
use tempfile::NamedTempFile;

fn line(name: &str, team: &str, stats: StatBlock) -> StatLine {
    StatLine {
        name: name.to_string(),
        team: TeamCode::new(team),
        season: Season::new(2025),
        week: Week::new(12),
        player_id: None,
        stats,
    }
}

fn raw(position: &str, player: &str, started: bool) -> RawRosterEntry {
    RawRosterEntry {
        position: position.to_string(),
        player: player.to_string(),
        team: None,
        started,
    }
}

fn sample_context() -> ScoringContext {
    let lines = vec![
        line(
            "Drake Maye",
            "NE",
            StatBlock::Player(PlayerStats {
                passing_yards: 260,
                passing_tds: 2,
                ..Default::default()
            }),
        ),
        line(
            "Tre'Veon Henderson",
            "NE",
            StatBlock::Player(PlayerStats {
                rushing_yards: 80,
                receiving_yards: 45,
                rushing_tds: 1,
                ..Default::default()
            }),
        ),
        line(
            "Baltimore",
            "BAL",
            StatBlock::Defense(DefenseStats {
                points_allowed: 0,
                interceptions: 2,
                sacks: 1,
                ..Default::default()
            }),
        ),
        line(
            "Sean McVay",
            "LA",
            StatBlock::Coach(CoachLine::from_game(27, 20, false, Some(-2.5))),
        ),
    ];
    ScoringContext::new(
        MatchConfig::default(),
        AliasTable::default(),
        StatsIndex::new(lines),
    )
}

fn sample_rosters() -> Vec<FantasyRoster> {
    vec![
        FantasyRoster {
            name: FantasyTeamName::new("Gridiron Gurus"),
            entries: vec![
                raw("QB", "Drake Maye (NE)", true),
                raw("RB", "TreVeyon Henderson (NE)", true),
                raw("DF", "Baltimore", false),
            ],
        },
        FantasyRoster {
            name: FantasyTeamName::new("Bye Week Blues"),
            entries: vec![
                raw("QB", "Jared Goff (DET)", true),
                raw("HC", "Sean McVay (LAR)", true),
                raw("XX", "Nobody (NE)", true),
            ],
        },
    ]
}

#[test]
fn test_validate_rosters_skips_malformed() {
    let (valid, skipped) = validate_rosters(&sample_rosters(), &AliasTable::default());
    assert_eq!(skipped, 1);
    assert_eq!(valid.len(), 2);
    assert_eq!(valid[0].entries.len(), 3);
    assert_eq!(valid[1].entries.len(), 2);
}

#[test]
fn test_score_week_end_to_end() {
    let ctx = sample_context();
    let report = score_week(&ctx, &sample_rosters(), Season::new(2025), Week::new(12));

    assert_eq!(report.skipped_entries, 1);
    assert_eq!(report.teams.len(), 2);

    let gurus = &report.teams[0];
    // Results stay in sheet order.
    let names: Vec<&str> = gurus.results.iter().map(|r| r.entry().name.as_str()).collect();
    assert_eq!(names, vec!["Drake Maye", "TreVeyon Henderson", "Baltimore"]);

    // 260 passing (3) + 2 TD (12)
    assert_eq!(gurus.results[0].total, 15);
    let henderson = &gurus.results[1];
    assert_eq!(henderson.match_kind(), MatchKind::Fuzzy);
    assert_eq!(
        henderson.resolution.matched_name.as_deref(),
        Some("Tre'Veon Henderson")
    );
    // combined 125 (3) + 1 TD (6)
    assert_eq!(henderson.total, 9);
    // Bench defense scores but does not count.
    assert_eq!(gurus.results[2].total, 13);
    assert_eq!(gurus.total(), 24);

    let blues = &report.teams[1];
    assert_eq!(blues.results[0].match_kind(), MatchKind::NotFound);
    assert_eq!(blues.results[0].total, 0);
    // Road underdog win.
    assert_eq!(blues.results[1].total, 7);

    assert_eq!(report.standings[0].team.as_str(), "Gridiron Gurus");
    assert_eq!(report.standings[0].rank, 1);
    assert_eq!(report.standings[1].total, 7);
    assert_eq!(report.standings[1].unresolved_starters, 1);
}

#[test]
fn test_score_week_other_week_is_all_not_found() {
    let ctx = sample_context();
    let report = score_week(&ctx, &sample_rosters(), Season::new(2025), Week::new(3));
    for team in &report.teams {
        assert!(team
            .results
            .iter()
            .all(|r| r.match_kind() == MatchKind::NotFound && r.total == 0));
    }
    assert!(report.standings.iter().all(|s| s.total == 0));
}

#[test]
fn test_render_text_marks_matches() {
    let ctx = sample_context();
    let report = score_week(&ctx, &sample_rosters(), Season::new(2025), Week::new(12));
    let text = render_text(&report, true);

    assert!(text.starts_with("OPFL 2025 week 12"));
    assert!(text.contains("-> Tre'Veon Henderson"));
    assert!(text.contains("(no stats)"));
    assert!(text.contains("points_allowed +8"));
    assert!(text.contains("(1 unresolved starter)"));
    assert!(text.contains("1 malformed entries skipped"));

    let quiet = render_text(&report, false);
    assert!(!quiet.contains("points_allowed"));
}

#[test]
fn test_format_breakdown_floor_note() {
    use crate::scoring::{Breakdown, Category, CategoryPoints};
    let breakdown = Breakdown::Scored {
        items: vec![CategoryPoints {
            category: Category::Interceptions,
            points: -2,
        }],
        floor_applied: true,
    };
    assert_eq!(
        format_breakdown(&breakdown).as_deref(),
        Some("interceptions -2, floored at 0")
    );
    assert_eq!(format_breakdown(&Breakdown::Unscored), None);
}

#[test]
fn test_report_serializes_to_json() {
    let ctx = sample_context();
    let report = score_week(&ctx, &sample_rosters(), Season::new(2025), Week::new(12));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["season"], 2025);
    assert_eq!(json["standings"][0]["rank"], 1);
    assert_eq!(json["teams"][0]["results"][1]["resolution"]["kind"], "Fuzzy");
}

#[test]
fn test_context_load_from_files() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var(THRESHOLD_ENV_VAR);

    let mut config = NamedTempFile::new().unwrap();
    write!(
        config,
        r#"{{ "matching": {{ "threshold": 0.8 }}, "aliases": {{ "team_codes": {{ "WSH": "WAS" }} }} }}"#
    )
    .unwrap();

    let mut stats = NamedTempFile::new().unwrap();
    write!(
        stats,
        r#"[{{ "name": "Puka Nacua", "team": "LAR", "season": 2025, "week": 12,
              "stats": {{ "kind": "player", "receiving_yards": 110 }} }}]"#
    )
    .unwrap();

    let ctx = ScoringContext::load(Some(config.path()), stats.path(), None).unwrap();
    assert_eq!(ctx.matching.threshold, 0.8);
    assert_eq!(ctx.aliases.canonical(&TeamCode::new("WSH")), TeamCode::new("WAS"));
    // Stats are indexed under canonical codes.
    assert_eq!(
        ctx.index
            .team_week(&TeamCode::new("LA"), Season::new(2025), Week::new(12))
            .len(),
        1
    );

    let ctx = ScoringContext::load(Some(config.path()), stats.path(), Some(0.6)).unwrap();
    assert_eq!(ctx.matching.threshold, 0.6);

    assert!(ScoringContext::load(Some(config.path()), stats.path(), Some(1.5)).is_err());
}

#[test]
fn test_load_rosters_missing_file() {
    let result = load_rosters(std::path::Path::new("/no/such/rosters.json"));
    assert!(result.is_err());
}
