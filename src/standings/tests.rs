use super::*;
use crate::cli::types::Position;
use crate::resolve::ResolutionResult;
use crate::roster::RosterEntry;
use crate::scoring::Breakdown;

fn result(name: &str, started: bool, total: i32, kind: MatchKind) -> ScoreResult {
    ScoreResult {
        resolution: ResolutionResult {
            entry: RosterEntry::new(Position::WR, name, Some("NE"), started),
            resolved_team: None,
            stat_line: None,
            kind,
            matched_name: None,
            similarity: None,
            cross_team: false,
        },
        breakdown: Breakdown::Unscored,
        total,
    }
}

fn team(name: &str, results: Vec<ScoreResult>) -> TeamScores {
    TeamScores::new(FantasyTeamName::new(name), results)
}

#[test]
fn test_bench_excluded_from_total() {
    let t = team(
        "Gridiron Gurus",
        vec![
            result("A", true, 10, MatchKind::Exact),
            result("B", false, 30, MatchKind::Exact),
            result("C", true, 5, MatchKind::Fuzzy),
        ],
    );
    assert_eq!(t.total(), 15);
    assert_eq!(t.starters().count(), 2);
}

#[test]
fn test_unresolved_starters_counted() {
    let t = team(
        "Bye Week Blues",
        vec![
            result("A", true, 0, MatchKind::NotFound),
            result("B", false, 0, MatchKind::NotFound),
            result("C", true, 7, MatchKind::Exact),
        ],
    );
    assert_eq!(t.unresolved_starters(), 1);
    let standings = rank_standings(&[t]);
    assert_eq!(standings[0].unresolved_starters, 1);
    assert_eq!(standings[0].total, 7);
}

#[test]
fn test_rank_descending_with_stable_ties() {
    let teams = vec![
        team("Alpha", vec![result("a", true, 20, MatchKind::Exact)]),
        team("Bravo", vec![result("b", true, 35, MatchKind::Exact)]),
        team("Charlie", vec![result("c", true, 20, MatchKind::Exact)]),
        team("Delta", vec![]),
    ];
    let standings = rank_standings(&teams);
    let order: Vec<(&str, i32, usize)> = standings
        .iter()
        .map(|s| (s.team.as_str(), s.total, s.rank))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Bravo", 35, 1),
            ("Alpha", 20, 2),
            ("Charlie", 20, 3),
            ("Delta", 0, 4),
        ]
    );
}

#[test]
fn test_empty_input() {
    assert!(rank_standings(&[]).is_empty());
}
