//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{Season, Week};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one week of fantasy rosters against a stats file.
    ///
    /// Each roster entry is matched to a stat line (exact, partial, fuzzy,
    /// then cross-team), scored under OPFL rules, and the fantasy teams are
    /// ranked by the total of their started entries.
    Score {
        /// Roster JSON: list of `{ name, entries: [{ position, player, team?, started }] }`.
        #[clap(long, short)]
        roster: PathBuf,

        /// Stats JSON: list of stat lines for the week.
        #[clap(long = "stats", short = 'x')]
        stats: PathBuf,

        /// Season year (e.g. 2025).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Week to score.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        /// Fuzzy-match threshold in [0, 1] (or set `OPFL_FUZZY_THRESHOLD`).
        #[clap(long, short)]
        threshold: Option<f64>,

        /// Config file (defaults to `~/.config/opfl-scorer/config.json` when present).
        #[clap(long, short)]
        config: Option<PathBuf>,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,

        /// Show the per-category breakdown under each entry.
        #[clap(long, short)]
        breakdown: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "opfl",
    version,
    about = "OPFL fantasy football scorer: match weekly rosters to stats and rank teams"
)]
pub struct Opfl {
    #[clap(subcommand)]
    pub command: Commands,
}
