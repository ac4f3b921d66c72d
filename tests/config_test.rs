//! League id and client config resolution from args and the environment
//!
//! Env-var tests share one process, so everything touching
//! `ESPN_FFL_LEAGUE_ID` lives in a single test.

use espn_ffl_client::{
    core::{resolve_league_id, ClientConfig},
    espn::Endpoints,
    EspnError, LeagueId, LEAGUE_ID_ENV_VAR,
};

#[test]
fn test_resolve_league_id_sources() {
    // explicit id wins over the env var
    std::env::set_var(LEAGUE_ID_ENV_VAR, "54321");
    assert_eq!(
        resolve_league_id(Some(LeagueId::new(12345))).unwrap(),
        LeagueId::new(12345)
    );

    // env var, whitespace tolerated
    std::env::set_var(LEAGUE_ID_ENV_VAR, " 54321\n");
    assert_eq!(resolve_league_id(None).unwrap(), LeagueId::new(54321));

    // unparsable env var
    std::env::set_var(LEAGUE_ID_ENV_VAR, "not_a_number");
    assert!(matches!(
        resolve_league_id(None),
        Err(EspnError::InvalidLeagueId(_))
    ));

    // missing env var
    std::env::remove_var(LEAGUE_ID_ENV_VAR);
    match resolve_league_id(None) {
        Err(EspnError::MissingLeagueId { env_var }) => assert_eq!(env_var, LEAGUE_ID_ENV_VAR),
        other => panic!("Expected MissingLeagueId, got {:?}", other),
    }

    let config = ClientConfig::from_env(Some(LeagueId::new(7))).unwrap();
    assert_eq!(config.league_id, LeagueId::new(7));
    assert_eq!(config.endpoints, Endpoints::default());
}

#[test]
fn test_endpoints_rooted_at_mock() {
    let e = Endpoints::rooted_at("http://127.0.0.1:4000/");
    assert_eq!(e.modern, "http://127.0.0.1:4000/apis/v3/games/ffl/seasons/");
    assert_eq!(e.historical, "http://127.0.0.1:4000/apis/v3/games/ffl/leagueHistory/");
    assert_eq!(e.site, "http://127.0.0.1:4000/");
}
