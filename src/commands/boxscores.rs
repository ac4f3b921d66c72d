//! Boxscores command implementation

use tracing::debug;

use crate::{
    espn::{types::Boxscore, BoxscoreQuery, Era, EspnClient, Transport},
    MatchupPeriod, Result, Season, Week,
};

use super::{or_dash, points, render, OutputFormat};

/// Boxscores for a matchup period, from whichever API serves `season`.
///
/// `scoring_period` defaults to the matchup period's number, which holds for
/// regular-season weeks in single-week matchup leagues.
pub async fn handle_boxscores<T: Transport>(
    client: &EspnClient<T>,
    season: Season,
    matchup_period: MatchupPeriod,
    scoring_period: Option<Week>,
    format: OutputFormat,
) -> Result<String> {
    let query = BoxscoreQuery {
        season,
        matchup_period,
        scoring_period: scoring_period.unwrap_or(Week::new(matchup_period.as_u16())),
    };

    let era = Era::of(season);
    debug!(%season, ?era, "dispatching boxscores");
    let boxscores = match era {
        Era::Modern => client.get_boxscore_for_week(query).await?,
        Era::Historical => client.get_historical_scoreboard_for_week(query).await?,
    };

    render(&boxscores, format, boxscore_line)
}

fn boxscore_line(b: &Boxscore) -> String {
    let side = |team: &Option<crate::espn::types::BoxscoreTeam>| match team {
        Some(t) => format!("team {} {}", or_dash(t.team_id), points(t.points)),
        None => "BYE".to_string(),
    };
    format!(
        "matchup {} [period {}]: {} vs {}",
        or_dash(b.matchup_id),
        or_dash(b.matchup_period),
        side(&b.home),
        side(&b.away),
    )
}
