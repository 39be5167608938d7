//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use opfl_scorer::{
    cli::{Commands, Opfl},
    commands::score_week::{handle_score_week, ScoreWeekParams},
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let app = Opfl::parse();

    match app.command {
        Commands::Score {
            roster,
            stats,
            season,
            week,
            threshold,
            config,
            json,
            breakdown,
        } => {
            let what = format!("scoring {} against {}", roster.display(), stats.display());
            handle_score_week(ScoreWeekParams {
                roster_path: roster,
                stats_path: stats,
                season,
                week,
                threshold,
                config_path: config,
                as_json: json,
                show_breakdown: breakdown,
            })
            .with_context(|| what)?
        }
    }

    Ok(())
}
