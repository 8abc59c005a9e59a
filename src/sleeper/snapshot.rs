//! One fetch cycle's worth of league data.

use crate::{
    sleeper::{
        players::PlayerIndex,
        types::{
            LeagueDetails, PlayerCatalog, RosterRecord, TeamMatchupRecord, TrendingPlayer,
            UserRecord,
        },
    },
    LeagueId, Week,
};

/// Raw pieces of a snapshot, before the player index is derived.
#[derive(Debug, Clone, Default)]
pub struct SnapshotParts {
    pub league_id: Option<LeagueId>,
    pub week: Week,
    pub league: LeagueDetails,
    pub rosters: Vec<RosterRecord>,
    pub users: Vec<UserRecord>,
    pub matchups: Vec<TeamMatchupRecord>,
    pub next_matchups: Vec<TeamMatchupRecord>,
    pub players: PlayerCatalog,
    pub trending_adds: Vec<TrendingPlayer>,
    pub trending_drops: Vec<TrendingPlayer>,
    /// Best-effort endpoints that fell back to an empty result.
    pub degraded: Vec<String>,
}

/// Everything a report needs for one league and week. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct LeagueSnapshot {
    pub league_id: Option<LeagueId>,
    pub week: Week,
    pub league: LeagueDetails,
    pub rosters: Vec<RosterRecord>,
    pub users: Vec<UserRecord>,
    pub matchups: Vec<TeamMatchupRecord>,
    pub next_matchups: Vec<TeamMatchupRecord>,
    pub players: PlayerCatalog,
    pub index: PlayerIndex,
    pub trending_adds: Vec<TrendingPlayer>,
    pub trending_drops: Vec<TrendingPlayer>,
    pub degraded: Vec<String>,
}

impl LeagueSnapshot {
    pub fn from_parts(parts: SnapshotParts) -> Self {
        let index = PlayerIndex::build(&parts.players);
        Self {
            league_id: parts.league_id,
            week: parts.week,
            league: parts.league,
            rosters: parts.rosters,
            users: parts.users,
            matchups: parts.matchups,
            next_matchups: parts.next_matchups,
            players: parts.players,
            index,
            trending_adds: parts.trending_adds,
            trending_drops: parts.trending_drops,
            degraded: parts.degraded,
        }
    }

    pub fn league_name(&self) -> Option<&str> {
        self.league.name.as_deref().filter(|n| !n.is_empty())
    }

    /// First core collection that is empty, if any. Reports refuse to render without all four.
    pub fn missing_core_data(&self) -> Option<&'static str> {
        if self.matchups.is_empty() {
            Some("matchups")
        } else if self.users.is_empty() {
            Some("users")
        } else if self.rosters.is_empty() {
            Some("rosters")
        } else if self.players.is_empty() {
            Some("players")
        } else {
            None
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleeper::types::PlayerRecord;
    use crate::PlayerId;

    fn complete_parts() -> SnapshotParts {
        SnapshotParts {
            rosters: vec![RosterRecord {
                roster_id: 1,
                owner_id: Some("u1".to_string()),
            }],
            users: vec![UserRecord {
                user_id: "u1".to_string(),
                display_name: Some("Alice".to_string()),
            }],
            matchups: vec![TeamMatchupRecord {
                matchup_id: Some(1),
                roster_id: Some(1),
                ..Default::default()
            }],
            players: [(
                PlayerId::new("1"),
                PlayerRecord {
                    full_name: Some("Somebody".to_string()),
                    injury_status: Some("Out".to_string()),
                    ..Default::default()
                },
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_parts_builds_index() {
        let snapshot = LeagueSnapshot::from_parts(complete_parts());
        assert_eq!(snapshot.index.name(&PlayerId::new("1")), Some("Somebody"));
        assert_eq!(snapshot.index.injured_count(), 1);
        assert_eq!(snapshot.missing_core_data(), None);
        assert!(!snapshot.is_degraded());
    }

    #[test]
    fn test_missing_core_data_reports_first_gap() {
        let mut parts = complete_parts();
        parts.users.clear();
        parts.players = PlayerCatalog::default();
        let snapshot = LeagueSnapshot::from_parts(parts);
        assert_eq!(snapshot.missing_core_data(), Some("users"));

        let mut parts = complete_parts();
        parts.matchups.clear();
        assert_eq!(
            LeagueSnapshot::from_parts(parts).missing_core_data(),
            Some("matchups")
        );

        let mut parts = complete_parts();
        parts.players = PlayerCatalog::default();
        assert_eq!(
            LeagueSnapshot::from_parts(parts).missing_core_data(),
            Some("players")
        );
    }

    #[test]
    fn test_league_name_ignores_blank() {
        let mut parts = complete_parts();
        parts.league.name = Some(String::new());
        assert_eq!(LeagueSnapshot::from_parts(parts).league_name(), None);
    }
}
