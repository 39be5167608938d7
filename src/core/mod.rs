//! Core utilities for the OPFL scorer
//!
//! - `aliases`: team-code and defense-name normalization
//! - `config`: fuzzy-match settings and config-file loading
//! - `io`: file reading helpers

pub mod aliases;
pub mod config;
pub mod io;

// Re-export commonly used items for convenience
pub use aliases::{AliasOverrides, AliasTable};
pub use config::{Config, MatchConfig, TieBreak};
pub use io::{read_json, try_read_to_string};
