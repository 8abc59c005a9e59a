use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    config::SourceConfig,
    core::build_client,
    error::RecapError,
    sleeper::{
        snapshot::{LeagueSnapshot, SnapshotParts},
        types::{
            LeagueDetails, PlayerCatalog, RosterRecord, TeamMatchupRecord, TrendingPlayer,
            UserRecord,
        },
    },
    LeagueId, Result, Week,
};


/// Whether a failing endpoint sinks the whole fetch or falls back to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    Required,
    BestEffort,
}

/// The upstream resources one snapshot is built from.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    League(&'a LeagueId),
    Rosters(&'a LeagueId),
    Users(&'a LeagueId),
    Matchups(&'a LeagueId, Week),
    NextWeekMatchups(&'a LeagueId, Week),
    Players,
    TrendingAdd,
    TrendingDrop,
}

impl Endpoint<'_> {
    /// Path relative to the API root, e.g. `league/123/matchups/5`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::League(id) => format!("league/{id}"),
            Endpoint::Rosters(id) => format!("league/{id}/rosters"),
            Endpoint::Users(id) => format!("league/{id}/users"),
            Endpoint::Matchups(id, week) | Endpoint::NextWeekMatchups(id, week) => {
                format!("league/{id}/matchups/{week}")
            }
            Endpoint::Players => "players/nfl".to_string(),
            Endpoint::TrendingAdd => "players/nfl/trending/add".to_string(),
            Endpoint::TrendingDrop => "players/nfl/trending/drop".to_string(),
        }
    }

    pub fn policy(&self) -> FetchPolicy {
        match self {
            Endpoint::NextWeekMatchups(..) | Endpoint::TrendingAdd | Endpoint::TrendingDrop => {
                FetchPolicy::BestEffort
            }
            _ => FetchPolicy::Required,
        }
    }
}

/// Result of one endpoint call, tagged so hard and soft failures are handled in one place.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Ok(T),
    /// A best-effort call failed; `fallback` stands in for the data.
    Degraded { fallback: T, reason: String },
    Failed(RecapError),
}

impl<T: Default> FetchOutcome<T> {
    pub fn from_result(policy: FetchPolicy, result: Result<T>) -> Self {
        match (result, policy) {
            (Ok(value), _) => FetchOutcome::Ok(value),
            (Err(err), FetchPolicy::Required) => FetchOutcome::Failed(err),
            (Err(err), FetchPolicy::BestEffort) => FetchOutcome::Degraded {
                fallback: T::default(),
                reason: err.to_string(),
            },
        }
    }
}

impl<T> FetchOutcome<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, FetchOutcome::Degraded { .. })
    }

    /// Unwrap into data, noting degraded endpoints in `degraded`.
    pub fn settle(self, endpoint: &Endpoint<'_>, degraded: &mut Vec<String>) -> Result<T> {
        match self {
            FetchOutcome::Ok(value) => Ok(value),
            FetchOutcome::Degraded { fallback, reason } => {
                warn!(endpoint = %endpoint.path(), %reason, "best-effort endpoint degraded to empty");
                degraded.push(endpoint.path());
                Ok(fallback)
            }
            FetchOutcome::Failed(err) => Err(err),
        }
    }
}

/// Read-only client for the public Sleeper API.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self {
            http: build_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    /// GET one endpoint and decode its body. Every failure is `SourceUnavailable`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<T> {
        let url = self.url(endpoint);
        let unavailable = |reason: String| RecapError::SourceUnavailable {
            endpoint: endpoint.path(),
            reason,
        };

        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| unavailable(format!("malformed body: {e}")))
    }

    /// GET an endpoint whose body must be a JSON list of `T`.
    async fn get_list<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<Vec<T>> {
        match self.get::<Value>(endpoint).await? {
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<Vec<T>, _>>()
                .map_err(|e| RecapError::SourceUnavailable {
                    endpoint: endpoint.path(),
                    reason: format!("malformed list entry: {e}"),
                }),
            other => Err(RecapError::SourceUnavailable {
                endpoint: endpoint.path(),
                reason: format!("expected a JSON list, got {}", json_kind(&other)),
            }),
        }
    }

    /// GET a trending list, skipping entries that don't look like `{player_id, count}`.
    async fn get_trending(&self, endpoint: &Endpoint<'_>) -> Result<Vec<TrendingPlayer>> {
        match self.get::<Value>(endpoint).await? {
            Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect()),
            other => Err(RecapError::SourceUnavailable {
                endpoint: endpoint.path(),
                reason: format!("expected a JSON list, got {}", json_kind(&other)),
            }),
        }
    }

    async fn fetch<T, F>(&self, endpoint: Endpoint<'_>, degraded: &mut Vec<String>, call: F) -> Result<T>
    where
        T: Default,
        F: std::future::Future<Output = Result<T>>,
    {
        FetchOutcome::from_result(endpoint.policy(), call.await).settle(&endpoint, degraded)
    }

    /// Fetch everything a weekly report needs, one call after another.
    ///
    /// League, rosters, users, the week's matchups and the player catalog are
    /// required. Next week's matchups and both trending lists fall back to
    /// empty lists when they fail.
    pub async fn fetch_snapshot(&self, league_id: &LeagueId, week: Week) -> Result<LeagueSnapshot> {
        let mut degraded = Vec::new();
        let next_week = week.next();

        let league_ep = Endpoint::League(league_id);
        let league: LeagueDetails = self
            .fetch(league_ep, &mut degraded, self.get(&league_ep))
            .await?;

        let rosters_ep = Endpoint::Rosters(league_id);
        let rosters: Vec<RosterRecord> = self
            .fetch(rosters_ep, &mut degraded, self.get_list(&rosters_ep))
            .await?;

        let users_ep = Endpoint::Users(league_id);
        let users: Vec<UserRecord> = self
            .fetch(users_ep, &mut degraded, self.get_list(&users_ep))
            .await?;

        let matchups_ep = Endpoint::Matchups(league_id, week);
        let matchups: Vec<TeamMatchupRecord> = self
            .fetch(matchups_ep, &mut degraded, self.get_list(&matchups_ep))
            .await?;

        let next_ep = Endpoint::NextWeekMatchups(league_id, next_week);
        let next_matchups: Vec<TeamMatchupRecord> = self
            .fetch(next_ep, &mut degraded, self.get_list(&next_ep))
            .await?;

        let players_ep = Endpoint::Players;
        let players: PlayerCatalog = self
            .fetch(players_ep, &mut degraded, self.get(&players_ep))
            .await?;

        let adds_ep = Endpoint::TrendingAdd;
        let trending_adds = self
            .fetch(adds_ep, &mut degraded, self.get_trending(&adds_ep))
            .await?;

        let drops_ep = Endpoint::TrendingDrop;
        let trending_drops = self
            .fetch(drops_ep, &mut degraded, self.get_trending(&drops_ep))
            .await?;

        let snapshot = LeagueSnapshot::from_parts(SnapshotParts {
            league_id: Some(league_id.clone()),
            week,
            league,
            rosters,
            users,
            matchups,
            next_matchups,
            players,
            trending_adds,
            trending_drops,
            degraded,
        });

        info!(
            league = %league_id,
            %week,
            matchups = snapshot.matchups.len(),
            players = snapshot.players.len(),
            injured = snapshot.index.injured_count(),
            degraded = snapshot.degraded.len(),
            "league snapshot fetched"
        );

        Ok(snapshot)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
