//! Client configuration resolved from arguments and the environment.

use crate::{
    cli::types::LeagueId,
    core::http::Credentials,
    espn::route::Endpoints,
    error::EspnError,
    Result, LEAGUE_ID_ENV_VAR,
};

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) => raw.trim().parse::<LeagueId>(),
        Err(_) => Err(EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Everything an [`EspnClient`](crate::espn::client::EspnClient) needs at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub league_id: LeagueId,
    pub credentials: Option<Credentials>,
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// Public-league config against the production hosts.
    pub fn new(league_id: LeagueId) -> Self {
        Self {
            league_id,
            credentials: None,
            endpoints: Endpoints::default(),
        }
    }

    /// League id from the argument or `ESPN_FFL_LEAGUE_ID`, cookies from
    /// `ESPN_S2` / `ESPN_SWID` when both are set.
    pub fn from_env(league_id: Option<LeagueId>) -> Result<Self> {
        Ok(Self {
            league_id: resolve_league_id(league_id)?,
            credentials: Credentials::from_env(),
            endpoints: Endpoints::default(),
        })
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}
