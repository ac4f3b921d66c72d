//! ESPN API generations.
//!
//! Seasons from 2018 on are served by the per-season API
//! (`/seasons/{season}/segments/0/leagues/{league}`); earlier seasons only
//! exist behind `/leagueHistory/{league}?seasonId=...`, whose responses wrap
//! the payload in a single-element array.

use serde_json::Value;
use std::fmt;
use tracing::warn;

use crate::{cli::types::Season, error::EspnError, Result};

/// First season served by the modern API.
pub const MODERN_CUTOFF: Season = Season(2018);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Modern,
    Historical,
}

impl Era {
    pub fn of(season: Season) -> Self {
        if season >= MODERN_CUTOFF {
            Era::Modern
        } else {
            Era::Historical
        }
    }

    /// The object holding the named collections for this era's responses.
    ///
    /// Historical responses are `[ { ... } ]`; an empty or non-array body
    /// yields `None`.
    pub fn unwrap_envelope<'a>(&self, body: &'a Value) -> Option<&'a Value> {
        match self {
            Era::Modern => Some(body),
            Era::Historical => body.as_array()?.first(),
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Era::Modern => write!(f, "{}-or-later", MODERN_CUTOFF),
            Era::Historical => write!(f, "pre-{}", MODERN_CUTOFF),
        }
    }
}

fn check(season: Season, required: Era, operation: &str, alternate: Option<&str>) -> Result<()> {
    if Era::of(season) == required {
        return Ok(());
    }
    warn!(%season, operation, ?alternate, "rejected call for the wrong API generation");
    Err(EspnError::UnsupportedEra {
        operation: operation.to_string(),
        season,
        required,
        alternate: alternate.map(str::to_string),
    })
}

/// Fail unless `season` is served by the modern API.
pub fn assert_modern(season: Season, operation: &str, alternate: Option<&str>) -> Result<()> {
    check(season, Era::Modern, operation, alternate)
}

/// Fail unless `season` is served by the historical API. Every historical
/// operation has a modern counterpart, so `alternate` is required.
pub fn assert_historical(season: Season, operation: &str, alternate: &str) -> Result<()> {
    check(season, Era::Historical, operation, Some(alternate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_era_of_cutoff() {
        assert_eq!(Era::of(Season::new(2017)), Era::Historical);
        assert_eq!(Era::of(Season::new(2018)), Era::Modern);
        assert_eq!(Era::of(Season::new(2024)), Era::Modern);
        assert_eq!(Era::of(Season::new(2004)), Era::Historical);
    }

    #[test]
    fn test_assert_modern() {
        assert!(assert_modern(Season::new(2018), "op", None).is_ok());

        let err = assert_modern(Season::new(2017), "get_boxscore_for_week", Some("alt_op"))
            .unwrap_err();
        match &err {
            EspnError::UnsupportedEra {
                operation,
                season,
                required,
                alternate,
            } => {
                assert_eq!(operation, "get_boxscore_for_week");
                assert_eq!(*season, Season::new(2017));
                assert_eq!(*required, Era::Modern);
                assert_eq!(alternate.as_deref(), Some("alt_op"));
            }
            other => panic!("Expected UnsupportedEra, got {:?}", other),
        }
        assert!(err.to_string().contains("use alt_op instead"));
    }

    #[test]
    fn test_assert_historical() {
        assert!(assert_historical(Season::new(2017), "op", "alt").is_ok());

        let err = assert_historical(
            Season::new(2018),
            "get_historical_teams_at_week",
            "get_teams_at_week",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("get_historical_teams_at_week"));
        assert!(msg.contains("pre-2018"));
        assert!(msg.contains("use get_teams_at_week instead"));
    }

    #[test]
    fn test_unwrap_envelope() {
        let modern = json!({ "schedule": [1, 2] });
        assert_eq!(Era::Modern.unwrap_envelope(&modern), Some(&modern));

        let historical = json!([{ "schedule": [1, 2] }]);
        assert_eq!(Era::Historical.unwrap_envelope(&historical), Some(&modern));

        assert_eq!(Era::Historical.unwrap_envelope(&json!([])), None);
        assert_eq!(Era::Historical.unwrap_envelope(&modern), None);
    }
}
