//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, MatchupPeriod, Season, Week};

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
    #[clap(long, short, global = true)]
    pub league_id: Option<LeagueId>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log requests and response counts to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

/// A season and scoring period.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Season year (e.g. 2021). Seasons before 2018 use the league-history API.
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Scoring period (NFL week).
    #[clap(long, short, default_value_t = Week::default())]
    pub week: Week,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Boxscores for one matchup period.
    Boxscores {
        /// Season year (e.g. 2021). Seasons before 2018 use the league-history API.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Matchup period to report.
        #[clap(long, short)]
        matchup_period: MatchupPeriod,

        /// Scoring period; defaults to the matchup period's number.
        #[clap(long)]
        scoring_period: Option<Week>,
    },

    /// Draft picks with player details. 2018 or later.
    Draft {
        #[clap(flatten)]
        week: WeekArgs,
    },

    /// Free agents and players on waivers, most-owned first. 2018 or later.
    FreeAgents {
        #[clap(flatten)]
        week: WeekArgs,
    },

    /// Teams with rosters and owners.
    Teams {
        #[clap(flatten)]
        week: WeekArgs,
    },

    /// NFL games between two dates (YYYYMMDD, inclusive).
    Schedule {
        #[clap(long)]
        start: String,

        #[clap(long)]
        end: String,
    },

    /// League settings and current status. 2018 or later.
    League {
        /// Season year (e.g. 2021).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "espn-ffl-client",
    about = "Read-only ESPN Fantasy Football client"
)]
pub struct ESPN {
    #[clap(flatten)]
    pub opts: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boxscores_with_globals_after_subcommand() {
        let app = ESPN::try_parse_from([
            "espn-ffl-client",
            "boxscores",
            "--season",
            "2016",
            "--matchup-period",
            "3",
            "--league-id",
            "42",
            "--json",
        ])
        .unwrap();

        assert_eq!(app.opts.league_id, Some(LeagueId::new(42)));
        assert!(app.opts.json);
        assert!(!app.opts.verbose);
        match app.command {
            Commands::Boxscores {
                season,
                matchup_period,
                scoring_period,
            } => {
                assert_eq!(season, Season::new(2016));
                assert_eq!(matchup_period, MatchupPeriod::new(3));
                assert_eq!(scoring_period, None);
            }
            other => panic!("Expected Boxscores, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_week_args() {
        let app =
            ESPN::try_parse_from(["espn-ffl-client", "-v", "teams", "-s", "2021", "-w", "5"])
                .unwrap();
        assert!(app.opts.verbose);
        match app.command {
            Commands::Teams { week } => {
                assert_eq!(week.season, Season::new(2021));
                assert_eq!(week.week, Week::new(5));
            }
            other => panic!("Expected Teams, got {:?}", other),
        }
    }

    #[test]
    fn test_boxscores_requires_matchup_period() {
        assert!(ESPN::try_parse_from(["espn-ffl-client", "boxscores"]).is_err());
    }

    #[test]
    fn test_invalid_league_id_rejected() {
        assert!(ESPN::try_parse_from(["espn-ffl-client", "-l", "abc", "league"]).is_err());
    }
}
