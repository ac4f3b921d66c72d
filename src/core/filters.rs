//! ESPN `x-fantasy-filter` header payloads.
//!
//! ESPN's `kona_player_info` view returns every player in the game unless the
//! request carries an `x-fantasy-filter` header. The header holds a JSON object
//! whose filter values are wrapped as `{"value": ...}`.

use crate::Result;
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;

/// Header ESPN reads player filters from.
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// Page size used for the free-agent listing.
pub const FREE_AGENT_LIMIT: u32 = 2000;

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
/// For example: `{"filterStatus": {"value": ["FREEAGENT"]}}`
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

/// Roster status values accepted by `filterStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RosterStatus {
    FreeAgent,
    Waivers,
}

#[derive(Debug, Serialize)]
pub struct SortOrder {
    #[serde(rename = "sortAsc")]
    pub sort_asc: bool,
    #[serde(rename = "sortPriority")]
    pub sort_priority: u8,
}

/// Filter parameters under the `players` key.
#[derive(Debug, Default, Serialize)]
pub struct PlayersFilter {
    #[serde(rename = "filterStatus", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<Val<Vec<RosterStatus>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(rename = "sortPercOwned", skip_serializing_if = "Option::is_none")]
    pub sort_perc_owned: Option<SortOrder>,
}

/// Top-level `x-fantasy-filter` document.
#[derive(Debug, Default, Serialize)]
pub struct FantasyFilter {
    pub players: PlayersFilter,
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

/// Unrostered players (free agents and players on waivers), most-owned first,
/// capped at [`FREE_AGENT_LIMIT`].
pub fn free_agent_filter() -> FantasyFilter {
    FantasyFilter {
        players: PlayersFilter {
            filter_status: Some(Val {
                value: vec![RosterStatus::FreeAgent, RosterStatus::Waivers],
            }),
            limit: Some(FREE_AGENT_LIMIT),
            sort_perc_owned: Some(SortOrder {
                sort_asc: false,
                sort_priority: 1,
            }),
        },
    }
}

pub fn filter_header_name() -> HeaderName {
    HeaderName::from_static(FANTASY_FILTER_HEADER)
}
