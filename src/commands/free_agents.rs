//! Free agents command implementation

use crate::{
    espn::{types::FreeAgentPlayer, EspnClient, Transport, WeekQuery},
    Result,
};

use super::{or_dash, points, render, OutputFormat};

pub async fn handle_free_agents<T: Transport>(
    client: &EspnClient<T>,
    query: WeekQuery,
    format: OutputFormat,
) -> Result<String> {
    let players = client.get_free_agents(query).await?;
    render(&players, format, free_agent_line)
}

fn free_agent_line(p: &FreeAgentPlayer) -> String {
    let injury = p
        .injury_status
        .as_deref()
        .filter(|s| *s != "ACTIVE")
        .map(|s| format!(" [{}]", s))
        .unwrap_or_default();
    format!(
        "{} {} ({}){} {} owned {:.1}% actual {} proj {}",
        or_dash(p.player_id),
        p.full_name.as_deref().unwrap_or("-"),
        or_dash(p.position),
        injury,
        p.status.as_deref().unwrap_or("-"),
        p.percent_owned.unwrap_or(0.0),
        points(p.actual_points),
        points(p.projected_points),
    )
}
