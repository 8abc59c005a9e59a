//! Machine-readable weekly report. This is the shape consumers depend on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{RecapError, Result},
    report::{
        featured_injuries, preview_pairings, score_matchups, waiver_moves, MatchupKind,
        ReportPolicy, TeamResult, WaiverMove, FEATURED_INJURY_LIMIT, WAIVER_LIMIT,
    },
    sleeper::{LeagueSnapshot, PlayerInjuryRecord},
    Week,
};


pub const REPORT_TYPE: &str = "automated_json";
pub const REPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

const FALLBACK_LEAGUE_NAME: &str = "Unknown League";
const FREE_AGENT: &str = "FA";
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredReport {
    pub report_metadata: ReportMetadata,
    pub matchups: Vec<MatchupSummary>,
    pub injury_report: InjuryReport,
    pub next_week_preview: NextWeekPreview,
    pub waiver_wire_watch: WaiverWireWatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub league_name: String,
    pub week: Week,
    pub generated_timestamp: DateTime<Utc>,
    pub report_type: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSummary {
    pub matchup_id: u32,
    pub team1: TeamSummary,
    pub team2: TeamSummary,
    pub point_difference: f64,
    pub matchup_type: MatchupKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub name: String,
    pub points: f64,
    pub result: TeamResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryReport {
    pub featured_injuries: Vec<InjuryEntry>,
    pub total_injured_players: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryEntry {
    pub player: String,
    pub status: String,
    pub injury: String,
    pub team: String,
}

impl From<&PlayerInjuryRecord> for InjuryEntry {
    fn from(rec: &PlayerInjuryRecord) -> Self {
        Self {
            player: rec.full_name.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            status: rec.injury_status.clone(),
            injury: rec
                .injury_body_part
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            team: rec.team.clone().unwrap_or_else(|| FREE_AGENT.to_string()),
        }
    }
}

/// Pairings for the following week.
///
/// `matchups` holds every valid pairing, unlike the script's preview which
/// stops at three. It is empty when next week's schedule is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextWeekPreview {
    pub week: Week,
    pub matchups: Vec<PreviewMatchup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewMatchup {
    pub team1: String,
    pub team2: String,
    pub matchup_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiverWireWatch {
    pub hot_pickups: Vec<WaiverEntry>,
    pub falling_stars: Vec<WaiverEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiverEntry {
    pub player: String,
    pub count: u64,
}

impl From<WaiverMove<'_>> for WaiverEntry {
    fn from(m: WaiverMove<'_>) -> Self {
        Self {
            player: m.player.to_string(),
            count: m.count,
        }
    }
}

/// Round to cents, the precision Sleeper reports points in.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the structured report for `week`.
///
/// Fails with [`RecapError::InsufficientData`] under the same condition that
/// makes the narrative print its missing-data message.
pub fn build_structured_report(
    snapshot: &LeagueSnapshot,
    week: Week,
    policy: &ReportPolicy,
    generated_at: DateTime<Utc>,
) -> Result<StructuredReport> {
    if let Some(missing) = snapshot.missing_core_data() {
        return Err(RecapError::InsufficientData { missing });
    }

    let matchups = score_matchups(snapshot, policy)
        .into_iter()
        .map(|m| MatchupSummary {
            matchup_id: m.matchup_id,
            team1: TeamSummary {
                name: m.team1.name,
                points: m.team1.points,
                result: m.team1.result,
            },
            team2: TeamSummary {
                name: m.team2.name,
                points: m.team2.points,
                result: m.team2.result,
            },
            point_difference: round2(m.margin),
            matchup_type: m.kind,
        })
        .collect();

    let injury_report = InjuryReport {
        featured_injuries: featured_injuries(&snapshot.index, FEATURED_INJURY_LIMIT)
            .into_iter()
            .map(InjuryEntry::from)
            .collect(),
        total_injured_players: snapshot.index.injured_count(),
    };

    let next_week_preview = NextWeekPreview {
        week: week.next(),
        matchups: preview_pairings(snapshot)
            .into_iter()
            .map(|p| PreviewMatchup {
                team1: p.team1,
                team2: p.team2,
                matchup_id: p.matchup_id,
            })
            .collect(),
    };

    let waiver_wire_watch = WaiverWireWatch {
        hot_pickups: waiver_moves(&snapshot.trending_adds, &snapshot.index, WAIVER_LIMIT)
            .into_iter()
            .map(WaiverEntry::from)
            .collect(),
        falling_stars: waiver_moves(&snapshot.trending_drops, &snapshot.index, WAIVER_LIMIT)
            .into_iter()
            .map(WaiverEntry::from)
            .collect(),
    };

    Ok(StructuredReport {
        report_metadata: ReportMetadata {
            league_name: snapshot
                .league_name()
                .unwrap_or(FALLBACK_LEAGUE_NAME)
                .to_string(),
            week,
            generated_timestamp: generated_at,
            report_type: REPORT_TYPE.to_string(),
            version: REPORT_VERSION.to_string(),
        },
        matchups,
        injury_report,
        next_week_preview,
        waiver_wire_watch,
    })
}

impl StructuredReport {
    /// Pretty-printed UTF-8 JSON, as written by publishers.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
