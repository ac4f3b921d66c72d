//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use espn_ffl_client::{
    cli::{Commands, ESPN},
    commands::{
        boxscores::handle_boxscores, draft::handle_draft, free_agents::handle_free_agents,
        league::handle_league, schedule::handle_schedule, teams::handle_teams, OutputFormat,
    },
    core::ClientConfig,
    espn::{ScheduleQuery, WeekQuery},
    EspnClient, Result,
};
use std::io::stderr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so `--json` output stays machine-readable. `RUST_LOG`
/// overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "espn_ffl_client=debug"
    } else {
        "espn_ffl_client=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = ESPN::parse();
    init_logging(app.opts.verbose);

    let client = EspnClient::new(ClientConfig::from_env(app.opts.league_id)?)?;
    let format = OutputFormat::from_json_flag(app.opts.json);

    let output = match app.command {
        Commands::Boxscores {
            season,
            matchup_period,
            scoring_period,
        } => handle_boxscores(&client, season, matchup_period, scoring_period, format).await?,

        Commands::Draft { week } => {
            handle_draft(&client, WeekQuery::new(week.season, week.week), format).await?
        }

        Commands::FreeAgents { week } => {
            handle_free_agents(&client, WeekQuery::new(week.season, week.week), format).await?
        }

        Commands::Teams { week } => {
            handle_teams(&client, WeekQuery::new(week.season, week.week), format).await?
        }

        Commands::Schedule { start, end } => {
            handle_schedule(&client, &ScheduleQuery::new(start, end), format).await?
        }

        Commands::League { season } => handle_league(&client, season, format).await?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
