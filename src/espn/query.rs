//! Caller-supplied query parameters, one shape per operation family.

use crate::cli::types::{MatchupPeriod, Season, Week};

/// Boxscores / scoreboard for one matchup period.
///
/// `matchup_period` and `scoring_period` must describe the same week; ESPN
/// does not check that they agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxscoreQuery {
    pub season: Season,
    pub matchup_period: MatchupPeriod,
    pub scoring_period: Week,
}

/// A season plus one scoring period: teams, free agents, draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekQuery {
    pub season: Season,
    pub scoring_period: Week,
}

impl WeekQuery {
    pub fn new(season: Season, scoring_period: Week) -> Self {
        Self {
            season,
            scoring_period,
        }
    }
}

/// NFL games between two dates, both `YYYYMMDD`, inclusive.
///
/// The dates are passed through to ESPN unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub start_date: String,
    pub end_date: String,
}

impl ScheduleQuery {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// `YYYYMMDD-YYYYMMDD`, the form ESPN's `dates` parameter takes.
    pub fn date_range(&self) -> String {
        format!("{}-{}", self.start_date, self.end_date)
    }
}
