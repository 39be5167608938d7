//! OPFL roster positions.

use crate::error::OpflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roster positions used on the OPFL weekly sheet.
///
/// Unlike most leagues, OPFL rosters a head coach (`HC`) who scores from the
/// game result, and labels team defenses `DF`.
///
/// # Examples
///
/// ```rust
/// use opfl_scorer::Position;
///
/// let df: Position = "D/ST".parse().unwrap();
/// assert_eq!(df, Position::DF);
/// assert!(!Position::HC.is_individual());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Quarterback
    QB,
    /// Running Back
    RB,
    /// Wide Receiver
    WR,
    /// Tight End
    TE,
    /// Kicker
    K,
    /// Team defense
    DF,
    /// Head coach
    HC,
}

impl Position {
    /// All positions in sheet order.
    pub const ALL: [Position; 7] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DF,
        Position::HC,
    ];

    /// Positions whose stats come from an individual player record.
    pub fn is_individual(&self) -> bool {
        !matches!(self, Position::DF | Position::HC)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DF => "DF",
            Position::HC => "HC",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = OpflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DF" | "DEF" | "D/ST" | "DST" | "D" => Ok(Position::DF),
            "HC" | "COACH" => Ok(Position::HC),
            _ => Err(OpflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
