//! Time-related types for ESPN Fantasy Football seasons, scoring periods and matchup periods.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers.
///
/// ESPN calls this the scoring period: one NFL week per scoring period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// A fantasy matchup period. One matchup period may span several scoring
/// periods (e.g. two-week playoff rounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchupPeriod(pub u16);

impl MatchupPeriod {
    pub fn new(period: u16) -> Self {
        Self(period)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for MatchupPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchupPeriod {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_ordering() {
        assert!(Season::new(2017) < Season::new(2018));
        assert_eq!(Season::new(2021).max(Season::new(2019)), Season::new(2021));
    }

    #[test]
    fn test_week_and_matchup_period_parse() {
        assert_eq!("3".parse::<Week>().unwrap(), Week::new(3));
        assert_eq!("14".parse::<MatchupPeriod>().unwrap().as_u16(), 14);
        assert!("week".parse::<MatchupPeriod>().is_err());
    }
}
