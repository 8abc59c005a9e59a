//! Command implementations for the recap CLI

pub mod generate_report;
pub mod generate_script;

use chrono::{DateTime, Utc};

use crate::{config::Config, error::RecapError, LeagueId, Result, Week, LEAGUE_ID_ENV_VAR};

pub use generate_report::{
    handle_generate_report, ErrorResponse, GenerateReportRequest, ReportData, TriggerResponse,
};
pub use generate_script::handle_generate_script;

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }

    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Err(RecapError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// The requested week, or the current NFL week as of `now`.
pub fn resolve_week(week: Option<Week>, config: &Config, now: DateTime<Utc>) -> Week {
    week.unwrap_or_else(|| Week::current(now, config.season_kickoff))
}
