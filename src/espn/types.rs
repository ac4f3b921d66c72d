//! Domain entities built from ESPN response fragments.
//!
//! Every entity is built through [`FromServer`] from one raw JSON record (already
//! joined by [`crate::espn::correlate`]) plus a [`BuildContext`] carrying the ids
//! the record itself lacks. Wire structs are lenient: every field is optional
//! and a field of the wrong shape reads as absent, so one odd record never
//! fails an operation.

use serde::{de::DeserializeOwned, de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, MatchupPeriod, PlayerId, Position, Season, TeamId, Week},
    Result,
};

#[cfg(test)]
mod tests;

/// Ids supplied by the caller rather than the raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildContext {
    pub league_id: LeagueId,
    pub season: Option<Season>,
    pub scoring_period: Option<Week>,
    pub matchup_period: Option<MatchupPeriod>,
}

impl BuildContext {
    pub fn new(league_id: LeagueId) -> Self {
        Self {
            league_id,
            season: None,
            scoring_period: None,
            matchup_period: None,
        }
    }

    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn scoring_period(mut self, week: Week) -> Self {
        self.scoring_period = Some(week);
        self
    }

    pub fn matchup_period(mut self, period: MatchupPeriod) -> Self {
        self.matchup_period = Some(period);
        self
    }
}

/// Entity builder contract.
pub trait FromServer: Sized {
    fn build_from_server(raw: Value, ctx: &BuildContext) -> Result<Self>;
}

/// A field of the wrong shape decodes as `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

/// Like [`lenient`] for arrays, dropping only the elements that don't decode.
fn lenient_vec<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Decode a raw record; anything that isn't an object builds from defaults.
fn decode<W: DeserializeOwned + Default>(raw: Value) -> W {
    serde_json::from_value(raw).unwrap_or_else(|err| {
        debug!(error = %err, "record has an unexpected shape");
        W::default()
    })
}

/// Stat source for ESPN player stats
///     - Actual (game results):    statSourceId = 0
///     - Projected:                statSourceId = 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Actual,
    Projected,
}

impl StatSource {
    /// ESPN statSourceId corresponding to this source
    pub fn id(self) -> u8 {
        match self {
            StatSource::Actual => 0,
            StatSource::Projected => 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireStat {
    #[serde(deserialize_with = "lenient")]
    season_id: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    scoring_period_id: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    stat_source_id: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    stat_split_type_id: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    applied_total: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireOwnership {
    #[serde(deserialize_with = "lenient")]
    percent_owned: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    percent_started: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WirePlayer {
    #[serde(deserialize_with = "lenient")]
    id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    full_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    default_position_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pro_team_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    injury_status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    ownership: Option<WireOwnership>,
    #[serde(deserialize_with = "lenient_vec")]
    stats: Option<Vec<WireStat>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WirePoolEntry {
    #[serde(deserialize_with = "lenient")]
    id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    applied_stat_total: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    player: Option<WirePlayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireRosterEntry {
    #[serde(deserialize_with = "lenient")]
    player_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    lineup_slot_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    player_pool_entry: Option<WirePoolEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireRoster {
    #[serde(deserialize_with = "lenient_vec")]
    entries: Option<Vec<WireRosterEntry>>,
}

/// Weekly (split type 1) applied total for one season/week/source.
fn select_applied_total(
    stats: &[WireStat],
    season: Season,
    week: Week,
    source: StatSource,
) -> Option<f64> {
    stats.iter().find_map(|s| {
        let hit = s.season_id == Some(season.as_u16())
            && s.scoring_period_id == Some(week.as_u16())
            && s.stat_source_id == Some(source.id())
            && s.stat_split_type_id.unwrap_or(1) == 1;
        if hit {
            s.applied_total
        } else {
            None
        }
    })
}

/// A player occupying a lineup slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPlayer {
    pub player_id: Option<PlayerId>,
    pub full_name: Option<String>,
    pub position: Option<Position>,
    pub lineup_slot: Option<Position>,
    pub points: Option<f64>,
}

impl From<WireRosterEntry> for RosterPlayer {
    fn from(entry: WireRosterEntry) -> Self {
        let pool = entry.player_pool_entry.unwrap_or_default();
        let player = pool.player.unwrap_or_default();
        Self {
            player_id: entry.player_id.or(pool.id).or(player.id).map(PlayerId::new),
            full_name: player.full_name,
            position: player
                .default_position_id
                .and_then(Position::from_default_position_id),
            lineup_slot: entry.lineup_slot_id.and_then(Position::from_lineup_slot_id),
            points: pool.applied_stat_total,
        }
    }
}

fn roster_players(roster: Option<WireRoster>) -> Vec<RosterPlayer> {
    roster
        .and_then(|r| r.entries)
        .unwrap_or_default()
        .into_iter()
        .map(RosterPlayer::from)
        .collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireMatchupSide {
    #[serde(deserialize_with = "lenient")]
    team_id: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    total_points: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    points_by_scoring_period: Option<BTreeMap<String, f64>>,
    #[serde(deserialize_with = "lenient")]
    roster_for_current_scoring_period: Option<WireRoster>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireMatchup {
    #[serde(deserialize_with = "lenient")]
    id: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    matchup_period_id: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    home: Option<WireMatchupSide>,
    #[serde(deserialize_with = "lenient")]
    away: Option<WireMatchupSide>,
    #[serde(deserialize_with = "lenient")]
    winner: Option<String>,
}

/// One team's half of a matchup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxscoreTeam {
    pub team_id: Option<TeamId>,
    /// Points for the requested scoring period when ESPN breaks them out,
    /// otherwise the matchup total.
    pub points: Option<f64>,
    pub roster: Vec<RosterPlayer>,
}

impl BoxscoreTeam {
    fn build(side: WireMatchupSide, week: Option<Week>) -> Self {
        let period_points = week.and_then(|w| {
            side.points_by_scoring_period
                .as_ref()
                .and_then(|m| m.get(&w.to_string()).copied())
        });
        Self {
            team_id: side.team_id.map(TeamId::new),
            points: period_points.or(side.total_points),
            roster: roster_players(side.roster_for_current_scoring_period),
        }
    }
}

/// A head-to-head matchup for one scoring period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boxscore {
    pub league_id: LeagueId,
    pub season: Option<Season>,
    pub scoring_period: Option<Week>,
    pub matchup_id: Option<u32>,
    pub matchup_period: Option<MatchupPeriod>,
    pub home: Option<BoxscoreTeam>,
    /// Absent for bye weeks.
    pub away: Option<BoxscoreTeam>,
    pub winner: Option<String>,
}

impl FromServer for Boxscore {
    fn build_from_server(raw: Value, ctx: &BuildContext) -> Result<Self> {
        let wire: WireMatchup = decode(raw);
        Ok(Self {
            league_id: ctx.league_id,
            season: ctx.season,
            scoring_period: ctx.scoring_period,
            matchup_id: wire.id,
            matchup_period: wire
                .matchup_period_id
                .map(MatchupPeriod::new)
                .or(ctx.matchup_period),
            home: wire.home.map(|s| BoxscoreTeam::build(s, ctx.scoring_period)),
            away: wire.away.map(|s| BoxscoreTeam::build(s, ctx.scoring_period)),
            winner: wire.winner,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireDraftPick {
    #[serde(deserialize_with = "lenient")]
    overall_pick_number: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    round_id: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    round_pick_number: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    team_id: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    player_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    keeper: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    bid_amount: Option<u32>,
    // joined from the player record
    #[serde(deserialize_with = "lenient")]
    full_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    default_position_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pro_team_id: Option<i64>,
}

/// A draft pick with the drafted player's details, when ESPN still knows them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPick {
    pub league_id: LeagueId,
    pub season: Option<Season>,
    pub overall_pick: Option<u32>,
    pub round: Option<u32>,
    pub round_pick: Option<u32>,
    pub team_id: Option<TeamId>,
    pub player_id: Option<PlayerId>,
    pub keeper: bool,
    /// Auction leagues only.
    pub bid_amount: Option<u32>,
    pub player_name: Option<String>,
    pub position: Option<Position>,
    pub pro_team_id: Option<i64>,
}

impl FromServer for DraftPick {
    fn build_from_server(raw: Value, ctx: &BuildContext) -> Result<Self> {
        let wire: WireDraftPick = decode(raw);
        Ok(Self {
            league_id: ctx.league_id,
            season: ctx.season,
            overall_pick: wire.overall_pick_number,
            round: wire.round_id,
            round_pick: wire.round_pick_number,
            team_id: wire.team_id.map(TeamId::new),
            player_id: wire.player_id.map(PlayerId::new),
            keeper: wire.keeper.unwrap_or(false),
            bid_amount: wire.bid_amount,
            player_name: wire.full_name,
            position: wire
                .default_position_id
                .and_then(Position::from_default_position_id),
            pro_team_id: wire.pro_team_id,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireFreeAgent {
    #[serde(deserialize_with = "lenient")]
    id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    player: Option<WirePlayer>,
}

/// An unrostered player (free agent or on waivers).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeAgentPlayer {
    pub league_id: LeagueId,
    pub season: Option<Season>,
    pub scoring_period: Option<Week>,
    pub player_id: Option<PlayerId>,
    pub full_name: Option<String>,
    pub position: Option<Position>,
    pub pro_team_id: Option<i64>,
    pub injury_status: Option<String>,
    /// `FREEAGENT` or `WAIVERS`.
    pub status: Option<String>,
    pub percent_owned: Option<f64>,
    pub percent_started: Option<f64>,
    pub actual_points: Option<f64>,
    pub projected_points: Option<f64>,
}

impl FromServer for FreeAgentPlayer {
    fn build_from_server(raw: Value, ctx: &BuildContext) -> Result<Self> {
        let wire: WireFreeAgent = decode(raw);
        let player = wire.player.unwrap_or_default();
        let ownership = player.ownership.unwrap_or_default();
        let stats = player.stats.unwrap_or_default();
        let points = |source| match (ctx.season, ctx.scoring_period) {
            (Some(season), Some(week)) => select_applied_total(&stats, season, week, source),
            _ => None,
        };

        Ok(Self {
            league_id: ctx.league_id,
            season: ctx.season,
            scoring_period: ctx.scoring_period,
            player_id: player.id.or(wire.id).map(PlayerId::new),
            full_name: player.full_name,
            position: player
                .default_position_id
                .and_then(Position::from_default_position_id),
            pro_team_id: player.pro_team_id,
            injury_status: player.injury_status,
            status: wire.status,
            percent_owned: ownership.percent_owned,
            percent_started: ownership.percent_started,
            actual_points: points(StatSource::Actual),
            projected_points: points(StatSource::Projected),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireRecordLine {
    #[serde(deserialize_with = "lenient")]
    wins: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    losses: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    ties: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    points_for: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    points_against: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireTeamRecord {
    #[serde(deserialize_with = "lenient")]
    overall: Option<WireRecordLine>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireMember {
    #[serde(deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    display_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    last_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireTeam {
    #[serde(deserialize_with = "lenient")]
    id: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    abbrev: Option<String>,
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    nickname: Option<String>,
    #[serde(deserialize_with = "lenient")]
    logo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    playoff_seed: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    record: Option<WireTeamRecord>,
    #[serde(deserialize_with = "lenient")]
    roster: Option<WireRoster>,
    #[serde(deserialize_with = "lenient")]
    owner: Option<WireMember>,
}

/// League member who owns a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<WireMember> for Owner {
    fn from(m: WireMember) -> Self {
        Self {
            id: m.id,
            display_name: m.display_name,
            first_name: m.first_name,
            last_name: m.last_name,
        }
    }
}

/// A fantasy team as of one scoring period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub league_id: LeagueId,
    pub season: Option<Season>,
    pub scoring_period: Option<Week>,
    pub id: Option<TeamId>,
    pub abbrev: Option<String>,
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: Option<f64>,
    pub points_against: Option<f64>,
    pub playoff_seed: Option<u32>,
    pub roster: Vec<RosterPlayer>,
    pub owner: Option<Owner>,
}

impl FromServer for Team {
    fn build_from_server(raw: Value, ctx: &BuildContext) -> Result<Self> {
        let wire: WireTeam = decode(raw);
        let record = wire.record.and_then(|r| r.overall).unwrap_or_default();

        // Pre-2018 teams have `location` + `nickname`; newer ones a single `name`.
        let name = wire.name.or_else(|| match (wire.location, wire.nickname) {
            (Some(l), Some(n)) => Some(format!("{} {}", l.trim(), n.trim())),
            (l, n) => l.or(n),
        });

        Ok(Self {
            league_id: ctx.league_id,
            season: ctx.season,
            scoring_period: ctx.scoring_period,
            id: wire.id.map(TeamId::new),
            abbrev: wire.abbrev,
            name,
            logo_url: wire.logo,
            wins: record.wins.unwrap_or(0),
            losses: record.losses.unwrap_or(0),
            ties: record.ties.unwrap_or(0),
            points_for: record.points_for,
            points_against: record.points_against,
            playoff_seed: wire.playoff_seed,
            roster: roster_players(wire.roster),
            owner: wire.owner.map(Owner::from),
        })
    }
}

fn de_str_key_map_u8_f64<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<u8, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, f64> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| k.parse::<u8>().map(|kk| (kk, v)).map_err(D::Error::custom))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoringItem {
    #[serde(rename = "statId")]
    pub stat_id: u16,
    /// Base points for this stat (used when no override exists for the player's slot)
    pub points: f64,
    /// Overrides by lineup slot id (keys come in as strings)
    #[serde(
        rename = "pointsOverrides",
        deserialize_with = "de_str_key_map_u8_f64",
        default
    )]
    pub points_overrides: BTreeMap<u8, f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireScoringSettings {
    #[serde(deserialize_with = "lenient")]
    scoring_type: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    scoring_items: Option<Vec<ScoringItem>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireScheduleSettings {
    #[serde(deserialize_with = "lenient")]
    matchup_period_count: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    playoff_team_count: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireDraftSettings {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    draft_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireAcquisitionSettings {
    #[serde(deserialize_with = "lenient")]
    acquisition_budget: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireStatus {
    #[serde(deserialize_with = "lenient")]
    current_matchup_period: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    latest_scoring_period: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    final_scoring_period: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireLeague {
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    size: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    is_public: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    scoring_settings: Option<WireScoringSettings>,
    #[serde(deserialize_with = "lenient")]
    schedule_settings: Option<WireScheduleSettings>,
    #[serde(deserialize_with = "lenient")]
    draft_settings: Option<WireDraftSettings>,
    #[serde(deserialize_with = "lenient")]
    acquisition_settings: Option<WireAcquisitionSettings>,
    #[serde(deserialize_with = "lenient")]
    status: Option<WireStatus>,
}

/// League settings together with its in-season status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    pub season: Option<Season>,
    pub name: Option<String>,
    pub size: Option<u16>,
    pub is_public: Option<bool>,
    pub scoring_type: Option<String>,
    pub scoring_items: Vec<ScoringItem>,
    pub regular_season_matchup_periods: Option<u16>,
    pub playoff_team_count: Option<u16>,
    pub draft_type: Option<String>,
    pub acquisition_budget: Option<u32>,
    pub current_matchup_period: Option<MatchupPeriod>,
    pub latest_scoring_period: Option<Week>,
    pub final_scoring_period: Option<Week>,
    pub is_active: Option<bool>,
}

impl FromServer for League {
    fn build_from_server(raw: Value, ctx: &BuildContext) -> Result<Self> {
        let wire: WireLeague = decode(raw);
        let scoring = wire.scoring_settings.unwrap_or_default();
        let schedule = wire.schedule_settings.unwrap_or_default();
        let status = wire.status.unwrap_or_default();

        Ok(Self {
            league_id: ctx.league_id,
            season: ctx.season,
            name: wire.name,
            size: wire.size,
            is_public: wire.is_public,
            scoring_type: scoring.scoring_type,
            scoring_items: scoring.scoring_items.unwrap_or_default(),
            regular_season_matchup_periods: schedule.matchup_period_count,
            playoff_team_count: schedule.playoff_team_count,
            draft_type: wire.draft_settings.and_then(|d| d.draft_type),
            acquisition_budget: wire
                .acquisition_settings
                .and_then(|a| a.acquisition_budget),
            current_matchup_period: status.current_matchup_period.map(MatchupPeriod::new),
            latest_scoring_period: status.latest_scoring_period.map(Week::new),
            final_scoring_period: status.final_scoring_period.map(Week::new),
            is_active: status.is_active,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireProTeam {
    #[serde(deserialize_with = "lenient")]
    abbreviation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireCompetitor {
    #[serde(deserialize_with = "lenient")]
    home_away: Option<String>,
    /// The site API sends scores as strings.
    score: Option<Value>,
    /// Set directly on fantasy-API competitors.
    #[serde(deserialize_with = "lenient")]
    abbreviation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    team: Option<WireProTeam>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireCompetition {
    #[serde(deserialize_with = "lenient_vec")]
    competitors: Option<Vec<WireCompetitor>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireStatusType {
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    completed: Option<bool>,
}

/// `status` is an object on the site API and a bare state (`pre`, `in`,
/// `post`) on the fantasy API, which moves the detail to `fullStatus`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireGameStatus {
    State(String),
    Detailed {
        #[serde(rename = "type", default, deserialize_with = "lenient")]
        kind: Option<WireStatusType>,
    },
}

impl WireGameStatus {
    fn kind(self) -> Option<WireStatusType> {
        match self {
            WireGameStatus::Detailed { kind } => kind,
            WireGameStatus::State(_) => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireEvent {
    /// String on the site API, number on the fantasy API.
    id: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    short_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    status: Option<WireGameStatus>,
    #[serde(deserialize_with = "lenient")]
    full_status: Option<WireGameStatus>,
    #[serde(deserialize_with = "lenient_vec")]
    competitions: Option<Vec<WireCompetition>>,
    #[serde(deserialize_with = "lenient_vec")]
    competitors: Option<Vec<WireCompetitor>>,
}

/// One side of an NFL game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NflCompetitor {
    pub abbreviation: Option<String>,
    pub score: Option<f64>,
}

impl From<WireCompetitor> for NflCompetitor {
    fn from(c: WireCompetitor) -> Self {
        let score = c.score.and_then(|s| match s {
            Value::String(text) => text.parse().ok(),
            other => other.as_f64(),
        });
        Self {
            abbreviation: c.abbreviation.or_else(|| c.team.and_then(|t| t.abbreviation)),
            score,
        }
    }
}

/// A real-world NFL game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NflGame {
    pub id: Option<String>,
    pub date: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub status: Option<String>,
    pub completed: bool,
    pub home: Option<NflCompetitor>,
    pub away: Option<NflCompetitor>,
}

impl FromServer for NflGame {
    fn build_from_server(raw: Value, _ctx: &BuildContext) -> Result<Self> {
        let wire: WireEvent = decode(raw);

        let state = match &wire.status {
            Some(WireGameStatus::State(state)) => Some(state.clone()),
            _ => None,
        };
        let detail = wire
            .full_status
            .and_then(WireGameStatus::kind)
            .or_else(|| wire.status.and_then(WireGameStatus::kind))
            .unwrap_or_default();

        let mut home = None;
        let mut away = None;
        let competitors = wire
            .competitions
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.competitors)
            .or(wire.competitors)
            .unwrap_or_default();
        for c in competitors {
            match c.home_away.as_deref() {
                Some("home") => home = Some(NflCompetitor::from(c)),
                Some("away") => away = Some(NflCompetitor::from(c)),
                _ => {}
            }
        }

        Ok(Self {
            id: wire.id.and_then(|id| match id {
                Value::String(text) => Some(text),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
            date: wire.date,
            name: wire.name,
            short_name: wire.short_name,
            completed: detail
                .completed
                .unwrap_or_else(|| state.as_deref() == Some("post")),
            status: detail.name.or(state),
            home,
            away,
        })
    }
}
