//! Report synthesis shared by the narrative script and the structured JSON report
//!
//! Both renderers read the same scored matchups, injury list, preview and
//! waiver data from here, so a matchup is never a blowout in one artifact and
//! a close game in the other.

pub mod narrative;
pub mod structured;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    sleeper::{
        group_matchups,
        types::{RosterRecord, TeamMatchupRecord, TrendingPlayer, UserRecord},
        LeagueSnapshot, PlayerIndex, PlayerInjuryRecord,
    },
    PlayerId,
};

pub use narrative::{render_narrative, PhraseContext, PhraseSource, RandomPhrases, MISSING_DATA_MESSAGE};
pub use structured::{build_structured_report, StructuredReport};

/// Placeholder for any team whose roster, owner or user cannot be resolved.
pub const UNKNOWN_TEAM: &str = "Unknown";
/// Injuries listed by name; the rest are only counted.
pub const FEATURED_INJURY_LIMIT: usize = 5;
/// Trending entries considered per list.
pub const WAIVER_LIMIT: usize = 3;

/// Who wins when both teams score exactly the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Neither team wins; both are recorded as a tie.
    #[default]
    NoWinner,
    /// The first team listed in the pairing takes the win.
    FavorFirst,
}

/// Thresholds and tie handling used to classify every matchup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportPolicy {
    pub blowout_threshold: f64,
    /// `true`: a margin equal to the threshold already counts as a blowout.
    pub blowout_inclusive: bool,
    /// Margins at or below this are close games.
    pub close_threshold: f64,
    pub tie_break: TieBreak,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            blowout_threshold: 30.0,
            blowout_inclusive: false,
            close_threshold: 5.0,
            tie_break: TieBreak::NoWinner,
        }
    }
}

impl ReportPolicy {
    pub fn classify(&self, margin: f64) -> MatchupKind {
        let blowout = if self.blowout_inclusive {
            margin >= self.blowout_threshold
        } else {
            margin > self.blowout_threshold
        };

        if blowout {
            MatchupKind::Blowout
        } else if margin <= self.close_threshold {
            MatchupKind::Close
        } else {
            MatchupKind::Standard
        }
    }

    /// Results for (team1, team2). Strictly more points wins.
    pub fn results(&self, p1: f64, p2: f64) -> (TeamResult, TeamResult) {
        if p1 > p2 {
            (TeamResult::Win, TeamResult::Loss)
        } else if p2 > p1 {
            (TeamResult::Loss, TeamResult::Win)
        } else {
            match self.tie_break {
                TieBreak::NoWinner => (TeamResult::Tie, TeamResult::Tie),
                TieBreak::FavorFirst => (TeamResult::Win, TeamResult::Loss),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchupKind {
    #[serde(rename = "blowout")]
    Blowout,
    #[serde(rename = "close_game")]
    Close,
    #[serde(rename = "standard")]
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamResult {
    Win,
    Loss,
    Tie,
}

/// Roster -> owner -> display name.
#[derive(Debug)]
pub struct TeamDirectory<'a> {
    owners: HashMap<u32, Option<&'a str>>,
    users: HashMap<&'a str, &'a UserRecord>,
}

impl<'a> TeamDirectory<'a> {
    pub fn new(rosters: &'a [RosterRecord], users: &'a [UserRecord]) -> Self {
        Self {
            owners: rosters
                .iter()
                .map(|r| (r.roster_id, r.owner_id.as_deref()))
                .collect(),
            users: users.iter().map(|u| (u.user_id.as_str(), u)).collect(),
        }
    }

    /// Display name for a roster, or [`UNKNOWN_TEAM`] if any link is missing.
    pub fn team_name(&self, roster_id: Option<u32>) -> String {
        let user = roster_id
            .and_then(|id| self.owners.get(&id).copied().flatten())
            .and_then(|owner| self.users.get(owner));

        match user {
            Some(u) => match u.display_name.as_deref().filter(|n| !n.is_empty()) {
                Some(name) => name.to_string(),
                None => format!("User {}", u.user_id),
            },
            None => UNKNOWN_TEAM.to_string(),
        }
    }
}

/// One side of a scored matchup.
#[derive(Debug, Clone)]
pub struct TeamLine<'a> {
    pub name: String,
    pub points: f64,
    pub result: TeamResult,
    pub starters: &'a [PlayerId],
}

/// A valid pairing with names resolved and the margin classified.
#[derive(Debug, Clone)]
pub struct ScoredMatchup<'a> {
    pub matchup_id: u32,
    pub team1: TeamLine<'a>,
    pub team2: TeamLine<'a>,
    pub margin: f64,
    pub kind: MatchupKind,
}

impl<'a> ScoredMatchup<'a> {
    pub fn winner(&self) -> Option<&TeamLine<'a>> {
        if self.team1.result == TeamResult::Win {
            Some(&self.team1)
        } else if self.team2.result == TeamResult::Win {
            Some(&self.team2)
        } else {
            None
        }
    }

    /// Starters eligible for the spotlight: the winner's, or both lineups on a tie.
    /// Sleeper fills empty lineup slots with `"0"`; those are skipped.
    pub fn spotlight_pool(&self) -> Vec<&'a PlayerId> {
        let lineups: Vec<&'a [PlayerId]> = match self.winner() {
            Some(w) => vec![w.starters],
            None => vec![self.team1.starters, self.team2.starters],
        };
        lineups
            .into_iter()
            .flatten()
            .filter(|id| id.as_str() != "0")
            .collect()
    }
}

fn score_pair<'a>(
    matchup_id: u32,
    a: &'a TeamMatchupRecord,
    b: &'a TeamMatchupRecord,
    teams: &TeamDirectory<'_>,
    policy: &ReportPolicy,
) -> ScoredMatchup<'a> {
    let margin = (a.points - b.points).abs();
    let (r1, r2) = policy.results(a.points, b.points);
    ScoredMatchup {
        matchup_id,
        team1: TeamLine {
            name: teams.team_name(a.roster_id),
            points: a.points,
            result: r1,
            starters: &a.starters,
        },
        team2: TeamLine {
            name: teams.team_name(b.roster_id),
            points: b.points,
            result: r2,
            starters: &b.starters,
        },
        margin,
        kind: policy.classify(margin),
    }
}

/// Every valid pairing of the snapshot's week, in first-seen order.
pub fn score_matchups<'a>(snapshot: &'a LeagueSnapshot, policy: &ReportPolicy) -> Vec<ScoredMatchup<'a>> {
    let teams = TeamDirectory::new(&snapshot.rosters, &snapshot.users);
    group_matchups(&snapshot.matchups)
        .pairings()
        .map(|(id, a, b)| score_pair(id, a, b, &teams, policy))
        .collect()
}

/// A next-week pairing with team names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPairing {
    pub matchup_id: u32,
    pub team1: String,
    pub team2: String,
}

/// Valid pairings of next week, in first-seen order.
pub fn preview_pairings(snapshot: &LeagueSnapshot) -> Vec<PreviewPairing> {
    let teams = TeamDirectory::new(&snapshot.rosters, &snapshot.users);
    group_matchups(&snapshot.next_matchups)
        .pairings()
        .map(|(matchup_id, a, b)| PreviewPairing {
            matchup_id,
            team1: teams.team_name(a.roster_id),
            team2: teams.team_name(b.roster_id),
        })
        .collect()
}

/// The first injuries in catalog order.
pub fn featured_injuries(index: &PlayerIndex, limit: usize) -> Vec<&PlayerInjuryRecord> {
    index.injuries().take(limit).map(|(_, rec)| rec).collect()
}

/// A trending entry whose player resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct WaiverMove<'a> {
    pub player: &'a str,
    pub count: u64,
}

/// Resolve the first `limit` trending entries; entries without a known name are dropped.
pub fn waiver_moves<'a>(
    trending: &[TrendingPlayer],
    index: &'a PlayerIndex,
    limit: usize,
) -> Vec<WaiverMove<'a>> {
    trending
        .iter()
        .take(limit)
        .filter_map(|t| {
            let id = t.player_id.as_ref()?;
            index.name(id).map(|player| WaiverMove {
                player,
                count: t.count,
            })
        })
        .collect()
}
