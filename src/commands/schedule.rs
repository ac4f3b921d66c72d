//! NFL schedule command implementation

use crate::{
    espn::{
        types::{NflCompetitor, NflGame},
        EspnClient, ScheduleQuery, Transport,
    },
    Result,
};

use super::{render, OutputFormat};

pub async fn handle_schedule<T: Transport>(
    client: &EspnClient<T>,
    query: &ScheduleQuery,
    format: OutputFormat,
) -> Result<String> {
    let games = client.get_nfl_games_for_period(query).await?;
    render(&games, format, game_line)
}

fn competitor(c: &Option<NflCompetitor>) -> String {
    match c {
        Some(c) => format!(
            "{} {}",
            c.abbreviation.as_deref().unwrap_or("?"),
            c.score.map(|s| s.to_string()).unwrap_or_default()
        )
        .trim_end()
        .to_string(),
        None => "?".to_string(),
    }
}

fn game_line(g: &NflGame) -> String {
    format!(
        "{} {} @ {} [{}]",
        g.date.as_deref().unwrap_or("-"),
        competitor(&g.away),
        competitor(&g.home),
        g.status.as_deref().unwrap_or("-"),
    )
}
