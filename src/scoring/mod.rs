//! Scoring engine: turns a resolved stat line into OPFL points.
//!
//! Category values keep their sign for display; only the player's total is
//! floored at zero.

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cli::types::Position;
use crate::resolve::{MatchKind, ResolutionResult};
use crate::roster::RosterEntry;
use crate::stats::{CoachLine, DefenseStats, KickingStats, PlayerStats, StatBlock, StatLine};

use rules::{per_count, YardageMethod};


/// A line item in a score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PassingYards,
    RushingYards,
    ReceivingYards,
    CombinedRushRecYards,
    Touchdowns,
    TwoPointConversions,
    Interceptions,
    PickSixes,
    FumblesLost,
    FumbleSixes,
    PatMade,
    PatMissed,
    #[serde(rename = "fg_1_29")]
    Fg1To29,
    #[serde(rename = "fg_30_39")]
    Fg30To39,
    #[serde(rename = "fg_40_49")]
    Fg40To49,
    #[serde(rename = "fg_50_plus")]
    Fg50Plus,
    FgMissed,
    PointsAllowed,
    DefInterceptions,
    FumbleRecoveries,
    Sacks,
    Safeties,
    BlockedKicks,
    BlockedPats,
    DefensiveTds,
    HomeFavoriteWin,
    RoadFavoriteWin,
    HomeUnderdogWin,
    RoadUnderdogWin,
    #[serde(rename = "loss")]
    NoWin,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::PassingYards => "passing_yards",
            Category::RushingYards => "rushing_yards",
            Category::ReceivingYards => "receiving_yards",
            Category::CombinedRushRecYards => "combined_rush_rec_yards",
            Category::Touchdowns => "touchdowns",
            Category::TwoPointConversions => "two_point_conversions",
            Category::Interceptions => "interceptions",
            Category::PickSixes => "pick_sixes",
            Category::FumblesLost => "fumbles_lost",
            Category::FumbleSixes => "fumble_sixes",
            Category::PatMade => "pat_made",
            Category::PatMissed => "pat_missed",
            Category::Fg1To29 => "fg_1_29",
            Category::Fg30To39 => "fg_30_39",
            Category::Fg40To49 => "fg_40_49",
            Category::Fg50Plus => "fg_50_plus",
            Category::FgMissed => "fg_missed",
            Category::PointsAllowed => "points_allowed",
            Category::DefInterceptions => "def_interceptions",
            Category::FumbleRecoveries => "fumble_recoveries",
            Category::Sacks => "sacks",
            Category::Safeties => "safeties",
            Category::BlockedKicks => "blocked_kicks",
            Category::BlockedPats => "blocked_pats",
            Category::DefensiveTds => "defensive_tds",
            Category::HomeFavoriteWin => "home_favorite_win",
            Category::RoadFavoriteWin => "road_favorite_win",
            Category::HomeUnderdogWin => "home_underdog_win",
            Category::RoadUnderdogWin => "road_underdog_win",
            Category::NoWin => "loss",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
    pub category: Category,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Breakdown {
    /// No stat line: not an error, just nothing to score.
    Unscored,
    Scored {
        items: Vec<CategoryPoints>,
        /// The signed sum was negative and the total was raised to zero.
        floor_applied: bool,
    },
}

impl Breakdown {
    pub fn items(&self) -> &[CategoryPoints] {
        match self {
            Breakdown::Unscored => &[],
            Breakdown::Scored { items, .. } => items,
        }
    }

    pub fn get(&self, category: Category) -> Option<i32> {
        self.items()
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.points)
    }

    pub fn floor_applied(&self) -> bool {
        matches!(self, Breakdown::Scored { floor_applied: true, .. })
    }
}

/// A scored roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub resolution: ResolutionResult,
    pub breakdown: Breakdown,
    /// Never negative.
    pub total: i32,
}

impl ScoreResult {
    pub fn entry(&self) -> &RosterEntry {
        &self.resolution.entry
    }

    pub fn match_kind(&self) -> MatchKind {
        self.resolution.kind
    }
}

/// Score a resolution.
pub fn score(resolution: ResolutionResult) -> ScoreResult {
    let (breakdown, total) = score_line(resolution.entry.position, resolution.stat_line.as_ref());
    ScoreResult {
        resolution,
        breakdown,
        total,
    }
}

/// Score one stat line for `position`. Returns the breakdown and the floored total.
pub fn score_line(position: Position, line: Option<&StatLine>) -> (Breakdown, i32) {
    let Some(line) = line else {
        return (Breakdown::Unscored, 0);
    };

    let items = match (&line.stats, position) {
        (StatBlock::Player(stats), Position::K) => kicker_items(&stats.kicking),
        (StatBlock::Player(stats), p) if p.is_individual() => offense_items(p, stats),
        (StatBlock::Defense(stats), Position::DF) => defense_items(stats),
        (StatBlock::Coach(coach), Position::HC) => coach_items(coach),
        _ => {
            log::warn!(
                "{} scored as {} but carries {:?} stats; leaving unscored",
                line.name,
                position,
                line.kind()
            );
            return (Breakdown::Unscored, 0);
        }
    };

    finish(items)
}

fn finish(items: Vec<CategoryPoints>) -> (Breakdown, i32) {
    let sum = items.iter().fold(0i32, |acc, c| acc.saturating_add(c.points));
    let floor_applied = sum < 0;
    let total = sum.max(0);
    (
        Breakdown::Scored {
            items,
            floor_applied,
        },
        total,
    )
}

/// Collects non-zero categories in insertion order.
#[derive(Default)]
struct Items(Vec<CategoryPoints>);

impl Items {
    fn add(&mut self, category: Category, points: i32) {
        if points != 0 {
            self.always(category, points);
        }
    }

    fn always(&mut self, category: Category, points: i32) {
        self.0.push(CategoryPoints { category, points });
    }
}

fn offense_items(position: Position, stats: &PlayerStats) -> Vec<CategoryPoints> {
    let mut items = Items::default();

    if let Some(yardage) = rules::yardage_rules(position) {
        match rules::rush_rec_points(&yardage, stats.rushing_yards, stats.receiving_yards) {
            YardageMethod::Combined(points) => items.add(Category::CombinedRushRecYards, points),
            YardageMethod::Individual { rushing, receiving } => {
                items.add(Category::RushingYards, rushing);
                items.add(Category::ReceivingYards, receiving);
            }
        }
        items.add(Category::PassingYards, yardage.passing.points(stats.passing_yards));
    }

    let touchdowns = stats
        .passing_tds
        .saturating_add(stats.rushing_tds)
        .saturating_add(stats.receiving_tds);
    items.add(Category::Touchdowns, per_count(touchdowns, rules::TOUCHDOWN));
    items.add(
        Category::TwoPointConversions,
        per_count(stats.two_point_conversions, rules::TWO_POINT_CONVERSION),
    );

    let (ints, pick_sixes) = rules::turnover_points(stats.interceptions_thrown, stats.pick_sixes);
    items.add(Category::Interceptions, ints);
    items.add(Category::PickSixes, pick_sixes);

    let (fumbles, fumble_sixes) = rules::turnover_points(stats.fumbles_lost, stats.fumble_sixes);
    items.add(Category::FumblesLost, fumbles);
    items.add(Category::FumbleSixes, fumble_sixes);

    items.0
}

fn kicker_items(k: &KickingStats) -> Vec<CategoryPoints> {
    let mut items = Items::default();
    items.add(Category::PatMade, per_count(k.pat_made, rules::PAT_MADE));
    items.add(Category::PatMissed, per_count(k.pat_missed, rules::PAT_MISSED));
    items.add(Category::Fg1To29, per_count(k.fg_made_1_29, rules::FG_1_29));
    items.add(Category::Fg30To39, per_count(k.fg_made_30_39, rules::FG_30_39));
    items.add(Category::Fg40To49, per_count(k.fg_made_40_49, rules::FG_40_49));
    items.add(Category::Fg50Plus, per_count(k.fg_made_50_plus, rules::FG_50_PLUS));
    items.add(Category::FgMissed, per_count(k.fg_missed, rules::FG_MISSED));
    items.0
}

fn defense_items(d: &DefenseStats) -> Vec<CategoryPoints> {
    let mut items = Items::default();
    items.always(
        Category::PointsAllowed,
        rules::points_allowed_points(d.points_allowed),
    );
    items.add(Category::DefInterceptions, per_count(d.interceptions, rules::DEF_INTERCEPTION));
    items.add(
        Category::FumbleRecoveries,
        per_count(d.fumble_recoveries, rules::DEF_FUMBLE_RECOVERY),
    );
    items.add(Category::Sacks, per_count(d.sacks, rules::DEF_SACK));
    items.add(Category::Safeties, per_count(d.safeties, rules::DEF_SAFETY));
    items.add(Category::BlockedKicks, per_count(d.blocked_kicks, rules::DEF_BLOCKED_KICK));
    items.add(Category::BlockedPats, per_count(d.blocked_pats, rules::DEF_BLOCKED_PAT));
    items.add(Category::DefensiveTds, per_count(d.scoring_tds(), rules::DEF_TOUCHDOWN));
    items.0
}

fn coach_items(coach: &CoachLine) -> Vec<CategoryPoints> {
    let (category, points) = rules::coach_points(coach);
    let mut items = Items::default();
    items.always(category, points);
    items.0
}
