//! Structured report command: fetch, build, optionally publish.

use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::Config,
    core::{destination_path, report_file_name},
    error::RecapError,
    publish::{PublishStatus, Publisher},
    report::{
        build_structured_report,
        structured::{round2, StructuredReport},
    },
    sleeper::SleeperClient,
    LeagueId, Result, Week,
};

/// A fully resolved report request.
#[derive(Debug, Clone)]
pub struct GenerateReportRequest {
    pub league_id: LeagueId,
    pub week: Week,
    /// Hand the report to the publisher after building it.
    pub push: bool,
    /// Directory prefix inside the publisher's root.
    pub destination: Option<String>,
}

/// Success envelope printed on stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub status: String,
    pub message: String,
    pub data: ReportData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub league_id: LeagueId,
    pub league_name: String,
    pub week: Week,
    pub report: StructuredReport,
    pub processing_time_seconds: f64,
    pub publish: PublishStatus,
}

/// Error envelope printed on stdout when a command fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_id: Option<LeagueId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<Week>,
}

impl ErrorResponse {
    pub fn new(err: &RecapError, league_id: Option<LeagueId>, week: Option<Week>) -> Self {
        Self {
            status: "error".to_string(),
            error: err.public_message(),
            league_id,
            week,
        }
    }
}

/// Handle the generate report command
pub async fn handle_generate_report(
    request: GenerateReportRequest,
    config: &Config,
    publisher: &dyn Publisher,
) -> Result<TriggerResponse> {
    let started = Instant::now();
    let GenerateReportRequest {
        league_id,
        week,
        push,
        destination,
    } = request;

    info!(%league_id, %week, "generating report");

    let client = SleeperClient::new(&config.source)?;
    let snapshot = client.fetch_snapshot(&league_id, week).await?;
    let report = build_structured_report(&snapshot, week, &config.policy, Utc::now())?;

    let league_name = snapshot
        .league_name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("league_{league_id}"));

    let publish = if push {
        let payload = report.to_json_bytes()?;
        let file_name = report_file_name(&league_name, week.as_u16());
        let path = destination_path(destination.as_deref(), &file_name);
        let message = format!("Fantasy Report - {league_name} - Week {week}");
        publisher.publish(&path, &payload, &message)
    } else {
        PublishStatus::skipped()
    };

    let processing_time_seconds = round2(started.elapsed().as_secs_f64());
    info!(
        %league_id,
        %week,
        matchups = report.matchups.len(),
        pushed = publish.pushed,
        processing_time_seconds,
        "report generated"
    );

    Ok(TriggerResponse {
        status: "success".to_string(),
        message: format!("Report generated for {league_name} week {week}"),
        data: ReportData {
            league_id,
            league_name,
            week,
            report,
            processing_time_seconds,
            publish,
        },
    })
}
