//! Teams command implementation

use tracing::debug;

use crate::{
    espn::{types::Team, Era, EspnClient, Transport, WeekQuery},
    Result,
};

use super::{or_dash, points, render, OutputFormat};

/// Teams as of a scoring period, from whichever API serves the season.
pub async fn handle_teams<T: Transport>(
    client: &EspnClient<T>,
    query: WeekQuery,
    format: OutputFormat,
) -> Result<String> {
    let era = Era::of(query.season);
    debug!(season = %query.season, ?era, "dispatching teams");
    let teams = match era {
        Era::Modern => client.get_teams_at_week(query).await?,
        Era::Historical => client.get_historical_teams_at_week(query).await?,
    };
    render(&teams, format, team_line)
}

fn team_line(t: &Team) -> String {
    let owner = t
        .owner
        .as_ref()
        .and_then(|o| match (&o.first_name, &o.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => o.display_name.clone(),
        })
        .unwrap_or_else(|| "-".to_string());
    let starters = t
        .roster
        .iter()
        .filter(|p| p.lineup_slot.is_some_and(|slot| slot.is_starting_slot()))
        .count();
    format!(
        "{} {} ({}) {}-{}-{} PF {} PA {} owner {} [{} players, {} starting]",
        or_dash(t.id),
        t.name.as_deref().unwrap_or("-"),
        t.abbrev.as_deref().unwrap_or("-"),
        t.wins,
        t.losses,
        t.ties,
        points(t.points_for),
        points(t.points_against),
        owner,
        t.roster.len(),
        starters,
    )
}
