//! Upstream hosts and request paths.

use crate::cli::types::{LeagueId, Season};

/// Base path for the per-season ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/seasons/";

/// Base path for pre-2018 league data.
pub const FFL_HISTORY_URL: &str =
    "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/leagueHistory/";

/// Host for league-agnostic NFL game data.
pub const SITE_API_URL: &str = "https://site.api.espn.com/";

/// Base URLs for the three upstream hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub modern: String,
    pub historical: String,
    pub site: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            modern: FFL_BASE_URL.to_string(),
            historical: FFL_HISTORY_URL.to_string(),
            site: SITE_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// All three hosts rooted at one server, for pointing the client at a mock.
    pub fn rooted_at(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            modern: format!("{root}/apis/v3/games/ffl/seasons/"),
            historical: format!("{root}/apis/v3/games/ffl/leagueHistory/"),
            site: format!("{root}/"),
        }
    }
}

/// Concatenate a base path and an already-formatted query string.
///
/// Nothing is escaped or validated.
pub fn build_route(base: &str, params: &str) -> String {
    format!("{base}{params}")
}

/// Route base for a league season on the modern API (relative to [`Endpoints::modern`]).
pub fn season_league_base(season: Season, league_id: LeagueId) -> String {
    format!("{season}/segments/0/leagues/{league_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_route_concatenates() {
        assert_eq!(build_route("abc", "?x=1"), "abc?x=1");
        assert_eq!(build_route("", ""), "");
        assert_eq!(build_route("a b", "?q=a&b"), "a b?q=a&b");
    }

    #[test]
    fn test_build_route_distinct_inputs_give_distinct_routes() {
        let a = build_route("2021/segments/0/leagues/1", "?view=mTeam");
        let b = build_route("2021/segments/0/leagues/1", "?view=mRoster");
        let c = build_route("2020/segments/0/leagues/1", "?view=mTeam");
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_season_league_base() {
        assert_eq!(
            season_league_base(Season::new(2021), LeagueId::new(336358)),
            "2021/segments/0/leagues/336358"
        );
    }

    #[test]
    fn test_endpoints_rooted_at() {
        let e = Endpoints::rooted_at("http://127.0.0.1:4000/");
        assert_eq!(e.modern, "http://127.0.0.1:4000/apis/v3/games/ffl/seasons/");
        assert_eq!(
            e.historical,
            "http://127.0.0.1:4000/apis/v3/games/ffl/leagueHistory/"
        );
        assert_eq!(e.site, "http://127.0.0.1:4000/");
    }

    #[test]
    fn test_default_endpoints() {
        let e = Endpoints::default();
        assert_eq!(e.modern, FFL_BASE_URL);
        assert_eq!(e.historical, FFL_HISTORY_URL);
        assert_eq!(e.site, SITE_API_URL);
    }
}
