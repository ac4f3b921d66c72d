//! Fantasy football position types and utilities.

use crate::error::EspnError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions and roster slots.
///
/// ESPN encodes positions two different ways: a player's `defaultPositionId`
/// and a roster entry's `lineupSlotId`. Both map onto this enum.
///
/// # Examples
///
/// ```rust
/// use espn_ffl_client::Position;
///
/// assert_eq!(Position::from_default_position_id(1), Some(Position::QB));
/// assert_eq!(Position::from_lineup_slot_id(23), Some(Position::FLEX));
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DEF,
    K,
    FLEX,
    BE,
    IR,
}

impl Position {
    /// Map a player's `defaultPositionId`.
    pub fn from_default_position_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Position::QB),
            2 => Some(Position::RB),
            3 => Some(Position::WR),
            4 => Some(Position::TE),
            5 => Some(Position::K),
            16 => Some(Position::DEF),
            _ => None,
        }
    }

    /// Map a roster entry's `lineupSlotId`.
    pub fn from_lineup_slot_id(id: i64) -> Option<Self> {
        match id {
            0 | 1 => Some(Position::QB), // 1 is TQB
            2 => Some(Position::RB),
            3 | 4 => Some(Position::WR), // 3 is RB/WR
            5 | 6 => Some(Position::TE), // 5 is WR/TE
            16 => Some(Position::DEF),
            17 => Some(Position::K),
            20 => Some(Position::BE),
            21 => Some(Position::IR),
            23 => Some(Position::FLEX),
            _ => None,
        }
    }

    /// Whether a lineup slot holding this position scores points.
    pub fn is_starting_slot(&self) -> bool {
        !matches!(self, Position::BE | Position::IR)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DEF => "D/ST",
            Position::K => "K",
            Position::FLEX => "FLEX",
            Position::BE => "BE",
            Position::IR => "IR",
        };
        write!(f, "{}", s)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Position {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "K" => Ok(Position::K),
            "FLEX" => Ok(Position::FLEX),
            "BE" | "BENCH" => Ok(Position::BE),
            "IR" => Ok(Position::IR),
            other => Err(EspnError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}
