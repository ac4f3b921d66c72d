//! The ESPN fantasy football client.
//!
//! Each operation follows the same path: check the season against the API
//! generation the operation targets, build the route and request config, issue
//! the request(s), pull the relevant collection out of the response envelope,
//! join split records, then hand each raw record to its entity builder.
//!
//! Era checks run before any request is made. Transport errors are returned
//! unchanged. A collection missing from a response yields an empty `Vec`.

use serde_json::Value;
use std::sync::RwLock;
use tracing::{debug, info};

use crate::{
    cli::types::{LeagueId, Season},
    core::{
        config::ClientConfig,
        filters::{filter_header_name, free_agent_filter, IntoHeaderValue},
        http::{build_request_config, Credentials, RequestConfig},
    },
    espn::{
        correlate::{
            collection, join_draft_players, join_team_owners, matchups_in_period,
            merge_league_status,
        },
        era::{assert_historical, assert_modern, Era},
        http::{ReqwestTransport, Transport},
        query::{BoxscoreQuery, ScheduleQuery, WeekQuery},
        route::{build_route, season_league_base, Endpoints},
        types::{
            Boxscore, BuildContext, DraftPick, FreeAgentPlayer, FromServer, League, NflGame, Team,
        },
    },
    Result,
};


/// Operation names, as they appear in era errors.
pub mod ops {
    pub const GET_BOXSCORE_FOR_WEEK: &str = "get_boxscore_for_week";
    pub const GET_HISTORICAL_SCOREBOARD_FOR_WEEK: &str = "get_historical_scoreboard_for_week";
    pub const GET_DRAFT_INFO: &str = "get_draft_info";
    pub const GET_FREE_AGENTS: &str = "get_free_agents";
    pub const GET_TEAMS_AT_WEEK: &str = "get_teams_at_week";
    pub const GET_HISTORICAL_TEAMS_AT_WEEK: &str = "get_historical_teams_at_week";
    pub const GET_LEAGUE_INFO: &str = "get_league_info";
}

const NFL_GAMES_PATH: &str = "apis/fantasy/v2/games/ffl/games";

fn build_all<E: FromServer>(
    records: impl IntoIterator<Item = Value>,
    ctx: &BuildContext,
) -> Result<Vec<E>> {
    records
        .into_iter()
        .map(|raw| E::build_from_server(raw, ctx))
        .collect()
}

/// Read-only client for one ESPN fantasy football league.
///
/// # Examples
///
/// ```rust,no_run
/// use espn_ffl_client::{core::ClientConfig, espn::{EspnClient, WeekQuery}, LeagueId, Season, Week};
///
/// # async fn example() -> espn_ffl_client::Result<()> {
/// let client = EspnClient::new(ClientConfig::new(LeagueId::new(336358)))?;
/// let teams = client
///     .get_teams_at_week(WeekQuery::new(Season::new(2021), Week::new(3)))
///     .await?;
/// println!("{} teams", teams.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EspnClient<T = ReqwestTransport> {
    league_id: LeagueId,
    credentials: RwLock<Option<Credentials>>,
    endpoints: Endpoints,
    transport: T,
}

impl EspnClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> EspnClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            league_id: config.league_id,
            credentials: RwLock::new(config.credentials),
            endpoints: config.endpoints,
            transport,
        }
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace the cookie pair. Ignored unless both values are non-empty.
    pub fn set_cookies(&self, espn_s2: &str, swid: &str) {
        if let Some(creds) = Credentials::new(espn_s2, swid) {
            *self
                .credentials
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(creds);
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }

    fn credentials(&self) -> Option<Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Per-request config with this client's credentials merged in.
    pub fn request_config(&self, overrides: Option<&RequestConfig>) -> Result<Option<RequestConfig>> {
        build_request_config(self.credentials().as_ref(), overrides)
    }

    fn context(&self, season: Season) -> BuildContext {
        BuildContext::new(self.league_id).season(season)
    }

    async fn get(&self, route: &str, overrides: RequestConfig) -> Result<Value> {
        let config = self.request_config(Some(&overrides))?;
        debug!(
            route,
            base_url = ?overrides.base_url,
            authenticated = config.as_ref().is_some_and(|c| c.with_credentials),
            "issuing ESPN request"
        );
        self.transport.get(route, config.as_ref()).await
    }

    /// Boxscores for one matchup period of a 2018-or-later season.
    pub async fn get_boxscore_for_week(&self, query: BoxscoreQuery) -> Result<Vec<Boxscore>> {
        assert_modern(
            query.season,
            ops::GET_BOXSCORE_FOR_WEEK,
            Some(ops::GET_HISTORICAL_SCOREBOARD_FOR_WEEK),
        )?;
        self.fetch_boxscores(Era::Modern, query).await
    }

    /// Boxscores for one matchup period of a pre-2018 season.
    pub async fn get_historical_scoreboard_for_week(
        &self,
        query: BoxscoreQuery,
    ) -> Result<Vec<Boxscore>> {
        assert_historical(
            query.season,
            ops::GET_HISTORICAL_SCOREBOARD_FOR_WEEK,
            ops::GET_BOXSCORE_FOR_WEEK,
        )?;
        self.fetch_boxscores(Era::Historical, query).await
    }

    async fn fetch_boxscores(&self, era: Era, query: BoxscoreQuery) -> Result<Vec<Boxscore>> {
        let BoxscoreQuery {
            season,
            matchup_period,
            scoring_period,
        } = query;

        let (route, base_url) = match era {
            Era::Modern => (
                build_route(
                    &season_league_base(season, self.league_id),
                    &format!("?view=mMatchup&view=mMatchupScore&scoringPeriodId={scoring_period}"),
                ),
                &self.endpoints.modern,
            ),
            Era::Historical => (
                build_route(
                    &self.league_id.to_string(),
                    &format!(
                        "?scoringPeriodId={scoring_period}&seasonId={season}\
                         &view=mMatchupScore&view=mScoreboard&view=mSettings\
                         &view=mTopPerformers&view=modular&view=mNav"
                    ),
                ),
                &self.endpoints.historical,
            ),
        };

        let body = self
            .get(&route, RequestConfig::with_base_url(base_url.as_str()))
            .await?;
        let schedule = collection(era.unwrap_envelope(&body), "/schedule");
        let matchups = matchups_in_period(schedule, matchup_period);

        let ctx = self
            .context(season)
            .scoring_period(scoring_period)
            .matchup_period(matchup_period);
        let boxscores: Vec<Boxscore> = build_all(matchups.into_iter().cloned(), &ctx)?;

        info!(
            league_id = %self.league_id,
            %season,
            %matchup_period,
            ?era,
            count = boxscores.len(),
            "fetched boxscores"
        );
        Ok(boxscores)
    }

    /// Draft picks with player details joined in. 2018-or-later only.
    ///
    /// The draft and player requests run concurrently; if either fails the
    /// whole call fails.
    pub async fn get_draft_info(&self, query: WeekQuery) -> Result<Vec<DraftPick>> {
        let WeekQuery {
            season,
            scoring_period,
        } = query;
        assert_modern(season, ops::GET_DRAFT_INFO, None)?;

        let base = season_league_base(season, self.league_id);
        let draft_route = build_route(&base, "?view=mDraftDetail");
        let players_route = build_route(
            &base,
            &format!("?scoringPeriodId={scoring_period}&view=players_wl"),
        );
        let overrides = RequestConfig::with_base_url(self.endpoints.modern.as_str());

        let (draft, players) = tokio::try_join!(
            self.get(&draft_route, overrides.clone()),
            self.get(&players_route, overrides),
        )?;

        let picks = collection(Some(&draft), "/draftDetail/picks");
        let players = collection(Some(&players), "/players");
        let merged = join_draft_players(picks, players);

        let picks: Vec<DraftPick> = build_all(merged, &self.context(season))?;
        info!(league_id = %self.league_id, %season, count = picks.len(), "fetched draft");
        Ok(picks)
    }

    /// Free agents and players on waivers, most-owned first. 2018-or-later only.
    pub async fn get_free_agents(&self, query: WeekQuery) -> Result<Vec<FreeAgentPlayer>> {
        let WeekQuery {
            season,
            scoring_period,
        } = query;
        assert_modern(season, ops::GET_FREE_AGENTS, None)?;

        let route = build_route(
            &season_league_base(season, self.league_id),
            &format!("?scoringPeriodId={scoring_period}&view=kona_player_info"),
        );
        let overrides = RequestConfig::with_base_url(self.endpoints.modern.as_str())
            .header(filter_header_name(), free_agent_filter().to_header_value()?);

        let body = self.get(&route, overrides).await?;
        let players = collection(Some(&body), "/players");

        let ctx = self.context(season).scoring_period(scoring_period);
        let free_agents: Vec<FreeAgentPlayer> = build_all(players.iter().cloned(), &ctx)?;
        info!(
            league_id = %self.league_id,
            %season,
            %scoring_period,
            count = free_agents.len(),
            "fetched free agents"
        );
        Ok(free_agents)
    }

    /// Teams with rosters and owners as of a scoring period. 2018-or-later only.
    pub async fn get_teams_at_week(&self, query: WeekQuery) -> Result<Vec<Team>> {
        assert_modern(
            query.season,
            ops::GET_TEAMS_AT_WEEK,
            Some(ops::GET_HISTORICAL_TEAMS_AT_WEEK),
        )?;
        self.fetch_teams(Era::Modern, query).await
    }

    /// Teams with rosters and owners as of a scoring period. Pre-2018 only.
    pub async fn get_historical_teams_at_week(&self, query: WeekQuery) -> Result<Vec<Team>> {
        assert_historical(
            query.season,
            ops::GET_HISTORICAL_TEAMS_AT_WEEK,
            ops::GET_TEAMS_AT_WEEK,
        )?;
        self.fetch_teams(Era::Historical, query).await
    }

    async fn fetch_teams(&self, era: Era, query: WeekQuery) -> Result<Vec<Team>> {
        let WeekQuery {
            season,
            scoring_period,
        } = query;

        let (route, base_url) = match era {
            Era::Modern => (
                build_route(
                    &season_league_base(season, self.league_id),
                    &format!("?scoringPeriodId={scoring_period}&view=mRoster&view=mTeam"),
                ),
                &self.endpoints.modern,
            ),
            Era::Historical => (
                build_route(
                    &self.league_id.to_string(),
                    &format!(
                        "?scoringPeriodId={scoring_period}&seasonId={season}&view=mRoster&view=mTeam"
                    ),
                ),
                &self.endpoints.historical,
            ),
        };

        let body = self
            .get(&route, RequestConfig::with_base_url(base_url.as_str()))
            .await?;
        let envelope = era.unwrap_envelope(&body);
        let joined = join_team_owners(
            collection(envelope, "/teams"),
            collection(envelope, "/members"),
        );

        let ctx = self.context(season).scoring_period(scoring_period);
        let teams: Vec<Team> = build_all(joined, &ctx)?;
        info!(league_id = %self.league_id, %season, ?era, count = teams.len(), "fetched teams");
        Ok(teams)
    }

    /// NFL games in a date range. Works for any season and never sends the
    /// league cookies.
    pub async fn get_nfl_games_for_period(&self, query: &ScheduleQuery) -> Result<Vec<NflGame>> {
        let route = build_route(
            NFL_GAMES_PATH,
            &format!("?dates={}&pbpOnly=true", query.date_range()),
        );
        let config = RequestConfig::with_base_url(self.endpoints.site.as_str());
        debug!(route = %route, "issuing unauthenticated site request");

        let body = self.transport.get(&route, Some(&config)).await?;
        let events = collection(Some(&body), "/events");

        let games: Vec<NflGame> = build_all(events.iter().cloned(), &BuildContext::new(self.league_id))?;
        info!(dates = %query.date_range(), count = games.len(), "fetched NFL games");
        Ok(games)
    }

    /// League settings and current status. 2018-or-later only.
    pub async fn get_league_info(&self, season: Season) -> Result<League> {
        assert_modern(season, ops::GET_LEAGUE_INFO, None)?;

        let route = build_route(
            &season_league_base(season, self.league_id),
            "?view=mSettings&view=mStatus",
        );
        let body = self
            .get(&route, RequestConfig::with_base_url(self.endpoints.modern.as_str()))
            .await?;

        let record = merge_league_status(Some(&body));
        let league = League::build_from_server(record, &self.context(season))?;
        info!(league_id = %self.league_id, %season, "fetched league info");
        Ok(league)
    }
}
