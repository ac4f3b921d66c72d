//! Draft command implementation

use crate::{
    espn::{types::DraftPick, EspnClient, Transport, WeekQuery},
    Result,
};

use super::{or_dash, render, OutputFormat};

pub async fn handle_draft<T: Transport>(
    client: &EspnClient<T>,
    query: WeekQuery,
    format: OutputFormat,
) -> Result<String> {
    let picks = client.get_draft_info(query).await?;
    render(&picks, format, pick_line)
}

fn pick_line(p: &DraftPick) -> String {
    let keeper = if p.keeper { " [K]" } else { "" };
    let bid = p
        .bid_amount
        .map(|b| format!(" ${}", b))
        .unwrap_or_default();
    format!(
        "{:>3}. team {} {} ({}){}{}",
        or_dash(p.overall_pick),
        or_dash(p.team_id),
        p.player_name
            .clone()
            .unwrap_or_else(|| or_dash(p.player_id)),
        or_dash(p.position),
        bid,
        keeper,
    )
}
