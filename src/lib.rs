//! OPFL Scorer Library
//!
//! Resolution and scoring engine for the OPFL fantasy football league: match
//! hand-typed weekly roster entries to NFL stat lines, score them under OPFL
//! rules, and rank the fantasy teams.
//!
//! ## Features
//!
//! - **Staged Resolution**: exact, partial, fuzzy and cross-team matching with
//!   team-code aliases and a pluggable [`resolve::Similarity`]
//! - **OPFL Scoring**: yardage brackets with the combined bonus, turnover
//!   return overrides, kicker distance bands, defense and head-coach tables
//! - **Standings**: starter totals ranked across fantasy teams
//!
//! ## Quick Start
//!
//! ```rust
//! use opfl_scorer::{
//!     resolve::{resolve, MatchKind},
//!     roster::RosterEntry,
//!     scoring::score,
//!     stats::{PlayerStats, StatBlock, StatLine, StatsIndex},
//!     AliasTable, MatchConfig, Position, Season, TeamCode, Week,
//! };
//!
//! let index = StatsIndex::new(vec![StatLine {
//!     name: "Drake Maye".to_string(),
//!     team: TeamCode::new("NE"),
//!     season: Season::new(2025),
//!     week: Week::new(12),
//!     player_id: None,
//!     stats: StatBlock::Player(PlayerStats {
//!         passing_yards: 250,
//!         passing_tds: 1,
//!         ..Default::default()
//!     }),
//! }]);
//!
//! let entry = RosterEntry::new(Position::QB, "Drake Maye", Some("NE"), true);
//! let week = index.week(Season::new(2025), Week::new(12));
//! let resolution = resolve(&entry, &week, &AliasTable::default(), &MatchConfig::default());
//! assert_eq!(resolution.kind, MatchKind::Exact);
//!
//! let result = score(resolution);
//! assert_eq!(result.total, 9);
//! ```
//!
//! ## Environment Configuration
//!
//! Override the fuzzy-match threshold without a config file:
//! ```bash
//! export OPFL_FUZZY_THRESHOLD=0.8
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod resolve;
pub mod roster;
pub mod scoring;
pub mod standings;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{FantasyTeamName, Position, Season, TeamCode, Week};
pub use core::{AliasTable, Config, MatchConfig, TieBreak};
pub use error::{OpflError, Result};
