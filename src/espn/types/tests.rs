//! Unit tests for ESPN entity builders

use super::*;
use serde_json::json;

fn ctx() -> BuildContext {
    BuildContext::new(LeagueId::new(336358))
        .season(Season::new(2021))
        .scoring_period(Week::new(3))
}

#[cfg(test)]
mod boxscore_tests {
    use super::*;

    #[test]
    fn test_boxscore_from_matchup() {
        let raw = json!({
            "id": 17,
            "matchupPeriodId": 3,
            "winner": "HOME",
            "home": {
                "teamId": 1,
                "totalPoints": 121.4,
                "rosterForCurrentScoringPeriod": {
                    "entries": [
                        {
                            "playerId": 3139477,
                            "lineupSlotId": 0,
                            "playerPoolEntry": {
                                "id": 3139477,
                                "appliedStatTotal": 28.3,
                                "player": {
                                    "id": 3139477,
                                    "fullName": "Patrick Mahomes",
                                    "defaultPositionId": 1
                                }
                            }
                        },
                        {
                            "playerId": 15847,
                            "lineupSlotId": 20,
                            "playerPoolEntry": {
                                "appliedStatTotal": 4.0,
                                "player": { "fullName": "Bench Guy", "defaultPositionId": 3 }
                            }
                        }
                    ]
                }
            },
            "away": { "teamId": 6, "totalPoints": 98.0 }
        });

        let b = Boxscore::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(b.league_id, LeagueId::new(336358));
        assert_eq!(b.season, Some(Season::new(2021)));
        assert_eq!(b.scoring_period, Some(Week::new(3)));
        assert_eq!(b.matchup_id, Some(17));
        assert_eq!(b.matchup_period, Some(MatchupPeriod::new(3)));
        assert_eq!(b.winner.as_deref(), Some("HOME"));

        let home = b.home.unwrap();
        assert_eq!(home.team_id, Some(TeamId::new(1)));
        assert_eq!(home.points, Some(121.4));
        assert_eq!(home.roster.len(), 2);
        assert_eq!(home.roster[0].full_name.as_deref(), Some("Patrick Mahomes"));
        assert_eq!(home.roster[0].position, Some(Position::QB));
        assert_eq!(home.roster[0].lineup_slot, Some(Position::QB));
        assert_eq!(home.roster[0].points, Some(28.3));
        assert_eq!(home.roster[1].lineup_slot, Some(Position::BE));
        assert_eq!(home.roster[1].player_id, Some(PlayerId::new(15847)));

        let away = b.away.unwrap();
        assert_eq!(away.points, Some(98.0));
        assert!(away.roster.is_empty());
    }

    #[test]
    fn test_boxscore_prefers_scoring_period_points() {
        let raw = json!({
            "matchupPeriodId": 14,
            "home": {
                "teamId": 2,
                "totalPoints": 230.0,
                "pointsByScoringPeriod": { "14": 110.0, "3": 120.0 }
            }
        });
        let b = Boxscore::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(b.home.unwrap().points, Some(120.0));
        assert!(b.away.is_none());
    }

    #[test]
    fn test_boxscore_matchup_period_falls_back_to_context() {
        let context = ctx().matchup_period(MatchupPeriod::new(9));
        let b = Boxscore::build_from_server(json!({}), &context).unwrap();
        assert_eq!(b.matchup_period, Some(MatchupPeriod::new(9)));
        assert!(b.home.is_none());
    }

    #[test]
    fn test_boxscore_mistyped_fields_read_as_absent() {
        let raw = json!({
            "id": "seventeen",
            "matchupPeriodId": 3,
            "home": { "teamId": 1, "totalPoints": "lots" },
            "away": "bye"
        });
        let b = Boxscore::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(b.matchup_id, None);
        assert_eq!(b.matchup_period, Some(MatchupPeriod::new(3)));
        let home = b.home.unwrap();
        assert_eq!(home.team_id, Some(TeamId::new(1)));
        assert_eq!(home.points, None);
        assert!(b.away.is_none());
    }

    #[test]
    fn test_non_object_record_builds_from_context() {
        let b = Boxscore::build_from_server(json!("not a matchup"), &ctx()).unwrap();
        assert_eq!(b.season, Some(Season::new(2021)));
        assert!(b.matchup_id.is_none());
    }
}

#[cfg(test)]
mod draft_tests {
    use super::*;

    #[test]
    fn test_draft_pick_with_player_fields() {
        let raw = json!({
            "id": 1,
            "overallPickNumber": 1,
            "roundId": 1,
            "roundPickNumber": 1,
            "teamId": 4,
            "playerId": 3916387,
            "keeper": true,
            "fullName": "Jonathan Taylor",
            "defaultPositionId": 2,
            "proTeamId": 11
        });

        let pick = DraftPick::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(pick.overall_pick, Some(1));
        assert_eq!(pick.team_id, Some(TeamId::new(4)));
        assert_eq!(pick.player_id, Some(PlayerId::new(3916387)));
        assert!(pick.keeper);
        assert_eq!(pick.player_name.as_deref(), Some("Jonathan Taylor"));
        assert_eq!(pick.position, Some(Position::RB));
        assert_eq!(pick.pro_team_id, Some(11));
    }

    #[test]
    fn test_draft_pick_without_player_fields() {
        let raw = json!({ "overallPickNumber": 12, "teamId": 2, "playerId": -16002, "bidAmount": 3 });
        let pick = DraftPick::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(pick.player_id, Some(PlayerId::new(-16002)));
        assert_eq!(pick.bid_amount, Some(3));
        assert!(!pick.keeper);
        assert!(pick.player_name.is_none());
        assert!(pick.position.is_none());
    }
}

#[cfg(test)]
mod free_agent_tests {
    use super::*;

    #[test]
    fn test_free_agent_with_stats() {
        let raw = json!({
            "id": 4040715,
            "status": "FREEAGENT",
            "player": {
                "id": 4040715,
                "fullName": "Free Agent",
                "defaultPositionId": 4,
                "proTeamId": 25,
                "injuryStatus": "QUESTIONABLE",
                "ownership": { "percentOwned": 12.5, "percentStarted": 3.1 },
                "stats": [
                    { "seasonId": 2021, "scoringPeriodId": 3, "statSourceId": 0, "statSplitTypeId": 1, "appliedTotal": 7.2 },
                    { "seasonId": 2021, "scoringPeriodId": 3, "statSourceId": 1, "statSplitTypeId": 1, "appliedTotal": 9.9 },
                    { "seasonId": 2021, "scoringPeriodId": 0, "statSourceId": 0, "statSplitTypeId": 0, "appliedTotal": 30.0 }
                ]
            }
        });

        let fa = FreeAgentPlayer::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(fa.player_id, Some(PlayerId::new(4040715)));
        assert_eq!(fa.position, Some(Position::TE));
        assert_eq!(fa.status.as_deref(), Some("FREEAGENT"));
        assert_eq!(fa.injury_status.as_deref(), Some("QUESTIONABLE"));
        assert_eq!(fa.percent_owned, Some(12.5));
        assert_eq!(fa.percent_started, Some(3.1));
        assert_eq!(fa.actual_points, Some(7.2));
        assert_eq!(fa.projected_points, Some(9.9));
    }

    #[test]
    fn test_free_agent_without_period_has_no_points() {
        let raw = json!({
            "player": {
                "id": 1,
                "stats": [{ "seasonId": 2021, "scoringPeriodId": 3, "statSourceId": 0, "appliedTotal": 1.0 }]
            }
        });
        let context = BuildContext::new(LeagueId::new(1)).season(Season::new(2021));
        let fa = FreeAgentPlayer::build_from_server(raw, &context).unwrap();
        assert!(fa.actual_points.is_none());
        assert!(fa.scoring_period.is_none());
    }
}

#[cfg(test)]
mod team_tests {
    use super::*;

    #[test]
    fn test_team_with_owner_and_roster() {
        let raw = json!({
            "id": 3,
            "abbrev": "TACO",
            "name": "Taco Corp",
            "logo": "https://example.test/logo.png",
            "playoffSeed": 2,
            "primaryOwner": "{OWNER-1}",
            "record": {
                "overall": { "wins": 7, "losses": 3, "ties": 1, "pointsFor": 1290.4, "pointsAgainst": 1100.2 }
            },
            "roster": {
                "entries": [
                    { "playerId": 1, "lineupSlotId": 23, "playerPoolEntry": { "player": { "fullName": "Flex Guy", "defaultPositionId": 3 } } }
                ]
            },
            "owner": { "id": "{OWNER-1}", "displayName": "ally", "firstName": "Ally", "lastName": "Owner" }
        });

        let team = Team::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(team.id, Some(TeamId::new(3)));
        assert_eq!(team.name.as_deref(), Some("Taco Corp"));
        assert_eq!((team.wins, team.losses, team.ties), (7, 3, 1));
        assert_eq!(team.points_for, Some(1290.4));
        assert_eq!(team.playoff_seed, Some(2));
        assert_eq!(team.roster[0].lineup_slot, Some(Position::FLEX));

        let owner = team.owner.unwrap();
        assert_eq!(owner.id.as_deref(), Some("{OWNER-1}"));
        assert_eq!(owner.first_name.as_deref(), Some("Ally"));
    }

    #[test]
    fn test_team_location_nickname_and_missing_owner() {
        let raw = json!({ "id": 8, "location": "Team ", "nickname": "Eight" });
        let team = Team::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(team.name.as_deref(), Some("Team Eight"));
        assert!(team.owner.is_none());
        assert_eq!(team.wins, 0);
        assert!(team.roster.is_empty());
    }
}

#[cfg(test)]
mod league_tests {
    use super::*;

    #[test]
    fn test_league_from_settings_and_status() {
        let raw = json!({
            "name": "Office League",
            "size": 12,
            "isPublic": false,
            "scoringSettings": {
                "scoringType": "H2H_POINTS",
                "scoringItems": [
                    { "statId": 53, "points": 1.0, "pointsOverrides": { "16": 0.5 } },
                    { "statId": 1, "points": 4.0 }
                ]
            },
            "scheduleSettings": { "matchupPeriodCount": 14, "playoffTeamCount": 6 },
            "draftSettings": { "type": "SNAKE" },
            "acquisitionSettings": { "acquisitionBudget": 100 },
            "status": {
                "currentMatchupPeriod": 5,
                "latestScoringPeriod": 5,
                "finalScoringPeriod": 17,
                "isActive": true
            }
        });

        let league = League::build_from_server(raw, &BuildContext::new(LeagueId::new(9)).season(Season::new(2022)))
            .unwrap();
        assert_eq!(league.league_id, LeagueId::new(9));
        assert_eq!(league.season, Some(Season::new(2022)));
        assert_eq!(league.name.as_deref(), Some("Office League"));
        assert_eq!(league.size, Some(12));
        assert_eq!(league.scoring_type.as_deref(), Some("H2H_POINTS"));
        assert_eq!(league.scoring_items.len(), 2);
        assert_eq!(league.scoring_items[0].points_overrides.get(&16), Some(&0.5));
        assert!(league.scoring_items[1].points_overrides.is_empty());
        assert_eq!(league.regular_season_matchup_periods, Some(14));
        assert_eq!(league.playoff_team_count, Some(6));
        assert_eq!(league.draft_type.as_deref(), Some("SNAKE"));
        assert_eq!(league.acquisition_budget, Some(100));
        assert_eq!(league.current_matchup_period, Some(MatchupPeriod::new(5)));
        assert_eq!(league.final_scoring_period, Some(Week::new(17)));
        assert_eq!(league.is_active, Some(true));
    }

    #[test]
    fn test_league_from_empty_record() {
        let league = League::build_from_server(json!({}), &ctx()).unwrap();
        assert!(league.name.is_none());
        assert!(league.scoring_items.is_empty());
    }

    #[test]
    fn test_scoring_item_serialization() {
        let mut overrides = BTreeMap::new();
        overrides.insert(0, 0.05);

        let item = ScoringItem {
            stat_id: 24,
            points: 0.1,
            points_overrides: overrides,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["statId"], 24);
        assert_eq!(json["pointsOverrides"]["0"], 0.05);
    }
}

#[cfg(test)]
mod nfl_game_tests {
    use super::*;

    #[test]
    fn test_nfl_game_from_event() {
        let raw = json!({
            "id": "401326315",
            "date": "2021-09-10T00:20Z",
            "name": "Dallas Cowboys at Tampa Bay Buccaneers",
            "shortName": "DAL @ TB",
            "status": { "type": { "name": "STATUS_FINAL", "completed": true } },
            "competitions": [{
                "competitors": [
                    { "homeAway": "home", "score": "31", "team": { "abbreviation": "TB" } },
                    { "homeAway": "away", "score": 29, "team": { "abbreviation": "DAL" } }
                ]
            }]
        });

        let game = NflGame::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(game.id.as_deref(), Some("401326315"));
        assert_eq!(game.short_name.as_deref(), Some("DAL @ TB"));
        assert_eq!(game.status.as_deref(), Some("STATUS_FINAL"));
        assert!(game.completed);

        let home = game.home.unwrap();
        assert_eq!(home.abbreviation.as_deref(), Some("TB"));
        assert_eq!(home.score, Some(31.0));
        assert_eq!(game.away.unwrap().score, Some(29.0));
    }

    #[test]
    fn test_nfl_game_scheduled_without_competitions() {
        let game = NflGame::build_from_server(json!({ "id": "1" }), &ctx()).unwrap();
        assert!(!game.completed);
        assert!(game.home.is_none());
        assert!(game.away.is_none());
    }

    #[test]
    fn test_nfl_game_with_bare_state_and_event_competitors() {
        let raw = json!({
            "id": 401326316,
            "status": "post",
            "fullStatus": { "type": { "name": "STATUS_FINAL", "completed": true } },
            "competitors": [
                { "homeAway": "home", "abbreviation": "NO", "score": 38 },
                { "homeAway": "away", "abbreviation": "GB", "score": "3" }
            ]
        });

        let game = NflGame::build_from_server(raw, &ctx()).unwrap();
        assert_eq!(game.id.as_deref(), Some("401326316"));
        assert_eq!(game.status.as_deref(), Some("STATUS_FINAL"));
        assert!(game.completed);
        assert_eq!(game.home.unwrap().abbreviation.as_deref(), Some("NO"));
        assert_eq!(game.away.unwrap().score, Some(3.0));
    }

    #[test]
    fn test_nfl_game_bare_state_without_detail() {
        let game = NflGame::build_from_server(json!({ "status": "post" }), &ctx()).unwrap();
        assert_eq!(game.status.as_deref(), Some("post"));
        assert!(game.completed);

        let game = NflGame::build_from_server(json!({ "status": 7 }), &ctx()).unwrap();
        assert!(game.status.is_none());
        assert!(!game.completed);
    }
}
