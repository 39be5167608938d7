//! Shared setup for commands: configuration, alias table and stats index.

use std::path::Path;

use crate::{
    core::{config::Config, io::read_json, AliasTable, MatchConfig},
    roster::{FantasyRoster, RosterEntry},
    stats::{StatLine, StatsIndex},
    FantasyTeamName, Result,
};

/// Resources a scoring run needs, loaded once and then only read.
pub struct ScoringContext {
    pub matching: MatchConfig,
    pub aliases: AliasTable,
    pub index: StatsIndex,
}

impl ScoringContext {
    /// Load configuration and the stats file. `threshold` overrides the
    /// configured value when given.
    pub fn load(config_path: Option<&Path>, stats_path: &Path, threshold: Option<f64>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let mut matching = config.matching;
        if let Some(threshold) = threshold {
            matching = MatchConfig::new(threshold)?.with_tie_break(matching.tie_break);
        }

        let aliases = config.alias_table();
        let lines: Vec<StatLine> = read_json(stats_path, "stats file")?;
        log::info!("loaded {} stat lines from {}", lines.len(), stats_path.display());

        // Feeds may use stale codes too; index under canonical ones.
        let index = lines
            .into_iter()
            .map(|mut line| {
                line.team = aliases.canonical(&line.team);
                line
            })
            .collect::<StatsIndex>();

        Ok(Self {
            matching,
            aliases,
            index,
        })
    }

    pub fn new(matching: MatchConfig, aliases: AliasTable, index: StatsIndex) -> Self {
        Self {
            matching,
            aliases,
            index,
        }
    }
}

/// A fantasy team's validated entries.
#[derive(Debug, Clone)]
pub struct ValidRoster {
    pub name: FantasyTeamName,
    pub entries: Vec<RosterEntry>,
}

/// Validate every raw entry, skipping malformed ones with a warning.
///
/// Returns the surviving rosters and the number of skipped entries.
pub fn validate_rosters(rosters: &[FantasyRoster], aliases: &AliasTable) -> (Vec<ValidRoster>, usize) {
    let mut skipped = 0;
    let valid = rosters
        .iter()
        .map(|roster| {
            let entries = roster
                .entries
                .iter()
                .filter_map(|raw| match RosterEntry::try_from_raw(raw, aliases) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        log::warn!("{}: skipping entry: {}", roster.name, e);
                        skipped += 1;
                        None
                    }
                })
                .collect();
            ValidRoster {
                name: roster.name.clone(),
                entries,
            }
        })
        .collect();
    (valid, skipped)
}

/// Read the roster file.
pub fn load_rosters(path: &Path) -> Result<Vec<FantasyRoster>> {
    let rosters: Vec<FantasyRoster> = read_json(path, "roster file")?;
    log::info!("loaded {} fantasy rosters from {}", rosters.len(), path.display());
    Ok(rosters)
}
