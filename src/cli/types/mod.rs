//! Type-safe wrappers and enums for OPFL roster and stats data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{FantasyTeamName, TeamCode};
pub use position::Position;
pub use time::{Season, Week};
