//! Joins across ESPN response fragments.
//!
//! ESPN splits several logical records over separate endpoints or separate
//! sub-objects of one response. These helpers stitch them back together before
//! the records reach the entity builders. Joins are linear scans; when a key
//! occurs more than once the first match wins, and a missing match leaves the
//! joined part absent instead of failing.

use serde_json::{Map, Value};

use crate::cli::types::MatchupPeriod;

/// Array at `pointer` inside an unwrapped envelope, or an empty slice.
pub fn collection<'a>(envelope: Option<&'a Value>, pointer: &str) -> &'a [Value] {
    envelope
        .and_then(|e| e.pointer(pointer))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn is_numeric_key(key: &str) -> bool {
    key.parse::<i64>().is_ok()
}

/// Player id of a `players_wl` fragment: `player.id`, else a top-level `id`.
fn fragment_player_id(fragment: &Value) -> Option<i64> {
    fragment
        .pointer("/player/id")
        .or_else(|| fragment.get("id"))
        .and_then(Value::as_i64)
}

/// One level of flattening: the fragment's own attributes, then those of its
/// nested `player` object. Numeric keys are dropped.
fn flatten_player(fragment: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    let Some(obj) = fragment.as_object() else {
        return flat;
    };

    for (k, v) in obj {
        if k != "player" && !is_numeric_key(k) {
            flat.insert(k.clone(), v.clone());
        }
    }
    if let Some(inner) = obj.get("player").and_then(Value::as_object) {
        for (k, v) in inner {
            if !is_numeric_key(k) {
                flat.insert(k.clone(), v.clone());
            }
        }
    }
    flat
}

/// Merge player info into each draft pick, keeping draft order.
///
/// Pick fields win over player fields. A pick whose `playerId` matches no
/// player comes back with only its own fields.
pub fn join_draft_players(picks: &[Value], players: &[Value]) -> Vec<Value> {
    picks
        .iter()
        .map(|pick| {
            let pick_player = pick.get("playerId").and_then(Value::as_i64);
            let matched = pick_player.and_then(|id| {
                players
                    .iter()
                    .find(|p| fragment_player_id(p) == Some(id))
            });

            let mut record = matched.map(flatten_player).unwrap_or_default();
            match pick.as_object() {
                Some(fields) => {
                    for (k, v) in fields {
                        record.insert(k.clone(), v.clone());
                    }
                    Value::Object(record)
                }
                None => pick.clone(),
            }
        })
        .collect()
}

/// Attach each team's primary owner (from `members`) under an `owner` key.
///
/// The member is nested, never spread, so member and team ids cannot collide.
/// No matching member leaves `owner` absent, even if the fragment carried one.
pub fn join_team_owners(teams: &[Value], members: &[Value]) -> Vec<Value> {
    teams
        .iter()
        .map(|team| {
            let owner = team
                .get("primaryOwner")
                .and_then(|id| members.iter().find(|m| m.get("id") == Some(id)));

            let mut record = team.clone();
            if let Some(fields) = record.as_object_mut() {
                fields.remove("owner");
                if let Some(owner) = owner {
                    fields.insert("owner".to_string(), owner.clone());
                }
            }
            record
        })
        .collect()
}

/// `settings` with the league `status` object attached under `status`.
pub fn merge_league_status(envelope: Option<&Value>) -> Value {
    let mut record = envelope
        .and_then(|e| e.get("settings"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    if let Some(status) = envelope.and_then(|e| e.get("status")) {
        record.insert("status".to_string(), status.clone());
    }
    Value::Object(record)
}

/// Schedule entries belonging to one matchup period.
pub fn matchups_in_period(schedule: &[Value], period: MatchupPeriod) -> Vec<&Value> {
    schedule
        .iter()
        .filter(|m| {
            m.get("matchupPeriodId").and_then(Value::as_u64) == Some(u64::from(period.as_u16()))
        })
        .collect()
}
