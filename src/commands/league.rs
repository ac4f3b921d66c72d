//! League info command implementation

use crate::{
    espn::{types::League, EspnClient, Transport},
    Result, Season,
};

use super::{or_dash, OutputFormat};

pub async fn handle_league<T: Transport>(
    client: &EspnClient<T>,
    season: Season,
    format: OutputFormat,
) -> Result<String> {
    let league = client.get_league_info(season).await?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&league)?),
        OutputFormat::Text => Ok(league_summary(&league)),
    }
}

fn league_summary(l: &League) -> String {
    [
        format!(
            "{} (league {}, season {})",
            l.name.as_deref().unwrap_or("-"),
            l.league_id,
            or_dash(l.season)
        ),
        format!(
            "teams: {}, scoring: {}, draft: {}",
            or_dash(l.size),
            l.scoring_type.as_deref().unwrap_or("-"),
            l.draft_type.as_deref().unwrap_or("-"),
        ),
        format!(
            "regular season: {} matchup periods, playoff teams: {}",
            or_dash(l.regular_season_matchup_periods),
            or_dash(l.playoff_team_count),
        ),
        format!(
            "current matchup period: {}, latest scoring period: {}, active: {}",
            or_dash(l.current_matchup_period),
            or_dash(l.latest_scoring_period),
            or_dash(l.is_active),
        ),
        format!("scoring items: {}", l.scoring_items.len()),
    ]
    .join("\n")
}
