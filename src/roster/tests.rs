//! Unit tests for roster parsing

use super::*;

fn raw(position: &str, player: &str, team: Option<&str>, started: bool) -> RawRosterEntry {
    RawRosterEntry {
        position: position.to_string(),
        player: player.to_string(),
        team: team.map(str::to_string),
        started,
    }
}

#[test]
fn test_parse_player_cell_with_team() {
    let aliases = AliasTable::default();
    let (name, team) = parse_player_cell("Patrick Mahomes II (KC)", &aliases);
    assert_eq!(name, "Patrick Mahomes II");
    assert_eq!(team, Some(TeamCode::new("KC")));
}

#[test]
fn test_parse_player_cell_mixed_case_and_alias() {
    let aliases = AliasTable::default();
    let (name, team) = parse_player_cell("Caleb Williams (Chi)", &aliases);
    assert_eq!(name, "Caleb Williams");
    assert_eq!(team, Some(TeamCode::new("CHI")));

    let (_, team) = parse_player_cell("Puka Nacua(LAR)", &aliases);
    assert_eq!(team, Some(TeamCode::new("LA")));

    let (_, team) = parse_player_cell("Kyler Murray (Arz)", &aliases);
    assert_eq!(team, Some(TeamCode::new("ARI")));
}

#[test]
fn test_parse_player_cell_defense_name() {
    let aliases = AliasTable::default();
    let (name, team) = parse_player_cell("Baltimore", &aliases);
    assert_eq!(name, "Baltimore");
    assert_eq!(team, Some(TeamCode::new("BAL")));
}

#[test]
fn test_parse_player_cell_without_team() {
    let aliases = AliasTable::default();
    assert_eq!(
        parse_player_cell("  Sean McVay  ", &aliases),
        ("Sean McVay".to_string(), None)
    );
    // Parenthesized text that is not a team code stays part of the name.
    assert_eq!(
        parse_player_cell("Josh Allen (injured)", &aliases),
        ("Josh Allen (injured)".to_string(), None)
    );
    assert_eq!(parse_player_cell("", &aliases), (String::new(), None));
}

#[test]
fn test_try_from_raw_valid() {
    let aliases = AliasTable::default();
    let entry =
        RosterEntry::try_from_raw(&raw("rb", "TreVeyon Henderson (NE)", None, true), &aliases)
            .unwrap();
    assert_eq!(entry.position, Position::RB);
    assert_eq!(entry.name, "TreVeyon Henderson");
    assert_eq!(entry.team, Some(TeamCode::new("NE")));
    assert!(entry.started);
    assert_eq!(entry.label(), "TreVeyon Henderson (NE)");
}

#[test]
fn test_try_from_raw_explicit_team_wins() {
    let aliases = AliasTable::default();
    let entry =
        RosterEntry::try_from_raw(&raw("WR", "Davante Adams (LV)", Some("lar"), false), &aliases)
            .unwrap();
    assert_eq!(entry.team, Some(TeamCode::new("LAR")));
    assert!(!entry.started);
}

#[test]
fn test_try_from_raw_unknown_position() {
    let aliases = AliasTable::default();
    let err = RosterEntry::try_from_raw(&raw("LB", "Fred Warner (SF)", None, true), &aliases)
        .unwrap_err();
    match err {
        OpflError::MalformedEntry { reason } => assert!(reason.contains("LB")),
        other => panic!("Expected MalformedEntry, got {:?}", other),
    }
}

#[test]
fn test_try_from_raw_empty_name() {
    let aliases = AliasTable::default();
    assert!(matches!(
        RosterEntry::try_from_raw(&raw("QB", "   ", None, true), &aliases),
        Err(OpflError::MalformedEntry { .. })
    ));
}

#[test]
fn test_try_from_raw_bad_team_code() {
    let aliases = AliasTable::default();
    assert!(matches!(
        RosterEntry::try_from_raw(&raw("QB", "Jared Goff", Some("Detroit Lions"), true), &aliases),
        Err(OpflError::MalformedEntry { .. })
    ));
}

#[test]
fn test_raw_entry_json_defaults() {
    let entry: RawRosterEntry =
        serde_json::from_str(r#"{ "position": "K", "player": "Brandon Aubrey (DAL)" }"#).unwrap();
    assert_eq!(entry.team, None);
    assert!(!entry.started);
}

#[test]
fn test_new_trims_and_drops_blank_team() {
    let entry = RosterEntry::new(Position::HC, " Sean McVay ", Some(" "), true);
    assert_eq!(entry.name, "Sean McVay");
    assert_eq!(entry.team, None);
    assert_eq!(entry.label(), "Sean McVay");
}
