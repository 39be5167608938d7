//! OPFL rule tables.
//!
//! Everything here is a pure function of its arguments; the engine in
//! [`super`] decides which rules apply to which position.

use crate::cli::types::Position;
use crate::stats::{CoachLine, Line, Outcome, Venue};

use super::Category;

pub const TOUCHDOWN: i32 = 6;
pub const TWO_POINT_CONVERSION: i32 = 2;
pub const TURNOVER: i32 = -1;
/// Net value of a turnover returned for a touchdown. Replaces [`TURNOVER`].
pub const RETURNED_TURNOVER: i32 = -3;

pub const PAT_MADE: i32 = 1;
pub const PAT_MISSED: i32 = -1;
pub const FG_1_29: i32 = 1;
pub const FG_30_39: i32 = 2;
pub const FG_40_49: i32 = 3;
pub const FG_50_PLUS: i32 = 4;
pub const FG_MISSED: i32 = -2;

pub const DEF_INTERCEPTION: i32 = 2;
pub const DEF_FUMBLE_RECOVERY: i32 = 2;
pub const DEF_SAFETY: i32 = 2;
pub const DEF_BLOCKED_KICK: i32 = 2;
pub const DEF_BLOCKED_PAT: i32 = 1;
pub const DEF_TOUCHDOWN: i32 = 4;
pub const DEF_SACK: i32 = 1;

/// Yardage scoring: nothing below `minimum`, 2 points at it, then one more
/// point per full `increment` beyond it. No cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YardageBracket {
    pub minimum: i32,
    pub increment: i32,
}

impl YardageBracket {
    pub const fn new(minimum: i32, increment: i32) -> Self {
        Self { minimum, increment }
    }

    pub fn points(&self, yards: i32) -> i32 {
        if yards < self.minimum {
            return 0;
        }
        2 + (yards - self.minimum) / self.increment
    }
}

pub const PASSING: YardageBracket = YardageBracket::new(200, 50);
pub const RUSH_REC: YardageBracket = YardageBracket::new(75, 25);
pub const TE_RUSH_REC: YardageBracket = YardageBracket::new(50, 25);
pub const COMBINED: YardageBracket = YardageBracket::new(100, 25);
pub const TE_COMBINED: YardageBracket = YardageBracket::new(75, 25);

/// Brackets that apply to one offensive position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YardageRules {
    pub passing: YardageBracket,
    pub rushing: YardageBracket,
    pub receiving: YardageBracket,
    /// Alternate method on rushing + receiving; `None` for quarterbacks.
    pub combined: Option<YardageBracket>,
}

/// `None` for positions that do not score yardage.
pub fn yardage_rules(position: Position) -> Option<YardageRules> {
    match position {
        Position::QB => Some(YardageRules {
            passing: PASSING,
            rushing: RUSH_REC,
            receiving: RUSH_REC,
            combined: None,
        }),
        Position::RB | Position::WR => Some(YardageRules {
            passing: PASSING,
            rushing: RUSH_REC,
            receiving: RUSH_REC,
            combined: Some(COMBINED),
        }),
        Position::TE => Some(YardageRules {
            passing: PASSING,
            rushing: TE_RUSH_REC,
            receiving: TE_RUSH_REC,
            combined: Some(TE_COMBINED),
        }),
        Position::K | Position::DF | Position::HC => None,
    }
}

/// Which rushing/receiving method was used and what it was worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YardageMethod {
    Individual { rushing: i32, receiving: i32 },
    Combined(i32),
}

impl YardageMethod {
    pub fn points(&self) -> i32 {
        match self {
            YardageMethod::Individual { rushing, receiving } => rushing.saturating_add(*receiving),
            YardageMethod::Combined(points) => *points,
        }
    }
}

/// Score rushing and receiving yards, taking the combined bonus only when it
/// beats the sum of the individual categories. Equal totals keep the
/// individual breakdown.
pub fn rush_rec_points(rules: &YardageRules, rushing_yards: i32, receiving_yards: i32) -> YardageMethod {
    let rushing = rules.rushing.points(rushing_yards);
    let receiving = rules.receiving.points(receiving_yards);
    let individual = rushing.saturating_add(receiving);

    match rules.combined {
        Some(bracket) => {
            let combined = bracket.points(rushing_yards.saturating_add(receiving_yards));
            if combined > individual {
                YardageMethod::Combined(combined)
            } else {
                YardageMethod::Individual { rushing, receiving }
            }
        }
        None => YardageMethod::Individual { rushing, receiving },
    }
}

/// `n` occurrences worth `per` each, saturating at the `i32` bounds.
pub fn per_count(n: u32, per: i32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX).saturating_mul(per)
}

/// Split a turnover count into (regular, returned-for-TD) point values.
///
/// A returned turnover is worth [`RETURNED_TURNOVER`] in place of
/// [`TURNOVER`], never in addition to it.
pub fn turnover_points(total: u32, returned_for_td: u32) -> (i32, i32) {
    let regular = total.saturating_sub(returned_for_td);
    (
        per_count(regular, TURNOVER),
        per_count(returned_for_td, RETURNED_TURNOVER),
    )
}

/// Points-allowed step table. One point allowed falls in the 2-9 band.
pub fn points_allowed_points(points_allowed: u32) -> i32 {
    match points_allowed {
        0 => 8,
        1..=9 => 6,
        10..=13 => 4,
        14..=17 => 2,
        18..=27 => 0,
        28..=31 => -2,
        32..=35 => -4,
        _ => -6,
    }
}

/// Head-coach outcome table.
pub fn coach_points(line: &CoachLine) -> (Category, i32) {
    match (line.outcome, line.venue, line.line) {
        (Outcome::Win, Venue::Home, Line::Favorite) => (Category::HomeFavoriteWin, 4),
        (Outcome::Win, Venue::Road, Line::Favorite) => (Category::RoadFavoriteWin, 5),
        (Outcome::Win, Venue::Home, Line::Underdog) => (Category::HomeUnderdogWin, 6),
        (Outcome::Win, Venue::Road, Line::Underdog) => (Category::RoadUnderdogWin, 7),
        (Outcome::Loss | Outcome::Tie, _, _) => (Category::NoWin, 0),
    }
}
