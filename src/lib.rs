//! ESPN Fantasy Football read-only client
//!
//! Fetches league data from ESPN's fantasy football APIs and turns the raw
//! JSON into typed records: boxscores, draft picks, free agents, teams, league
//! settings and NFL games.
//!
//! ## API generations
//!
//! ESPN serves seasons from 2018 on through a per-season API and older seasons
//! through a separate league-history API. Every operation targets one of them
//! and rejects seasons from the other before any request is made:
//!
//! - [`EspnClient::get_boxscore_for_week`] / [`EspnClient::get_historical_scoreboard_for_week`]
//! - [`EspnClient::get_teams_at_week`] / [`EspnClient::get_historical_teams_at_week`]
//! - [`EspnClient::get_draft_info`], [`EspnClient::get_free_agents`] and
//!   [`EspnClient::get_league_info`] (2018 or later only)
//! - [`EspnClient::get_nfl_games_for_period`] (any season)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_ffl_client::{core::ClientConfig, espn::BoxscoreQuery, EspnClient, MatchupPeriod, Season, Week};
//!
//! # async fn example() -> espn_ffl_client::Result<()> {
//! let client = EspnClient::new(ClientConfig::from_env(None)?)?;
//! let boxscores = client
//!     .get_boxscore_for_week(BoxscoreQuery {
//!         season: Season::new(2021),
//!         matchup_period: MatchupPeriod::new(3),
//!         scoring_period: Week::new(3),
//!     })
//!     .await?;
//! println!("{} matchups", boxscores.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! # private leagues only
//! export ESPN_S2=...
//! export ESPN_SWID={...}
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;

// Re-export commonly used types
pub use cli::types::{LeagueId, MatchupPeriod, PlayerId, Position, Season, TeamId, Week};
pub use error::{EspnError, Result};
pub use espn::EspnClient;

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
