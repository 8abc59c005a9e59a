//! Entry point: parse CLI and dispatch to command handlers.

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use sleeper_recap::{
    cli::{Commands, GenerateCmd, Recap},
    commands::{
        handle_generate_report, handle_generate_script, resolve_league_id, resolve_week,
        ErrorResponse, GenerateReportRequest,
    },
    config::Config,
    error::ErrorClass,
    publish::FilesystemPublisher,
    report::RandomPhrases,
    LeagueId, RecapError, Result, Week,
};
use tracing::{error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the report or envelope
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sleeper_recap=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = Recap::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => std::process::exit(fail(&RecapError::from(e), None, None)),
    };

    let code = match app.command {
        Commands::Generate { cmd } => match cmd {
            GenerateCmd::Report {
                league_id,
                week,
                push,
                destination,
                report_only,
            } => run_report(&config, league_id, week, push, destination, report_only).await,

            GenerateCmd::Script { league_id, week } => run_script(&config, league_id, week).await,
        },

        Commands::CurrentWeek => {
            println!("{}", Week::current(Utc::now(), config.season_kickoff));
            0
        }
    };

    std::process::exit(code);
}

async fn run_report(
    config: &Config,
    league_id: Option<LeagueId>,
    week: Option<Week>,
    push: bool,
    destination: Option<String>,
    report_only: bool,
) -> i32 {
    let league_id = match resolve_league_id(league_id) {
        Ok(id) => id,
        Err(e) => return fail(&e, None, week),
    };
    let week = resolve_week(week, config, Utc::now());
    let publisher = FilesystemPublisher::new(&config.reports_dir);

    let request = GenerateReportRequest {
        league_id: league_id.clone(),
        week,
        push,
        destination,
    };

    let printed = match handle_generate_report(request, config, &publisher).await {
        Ok(response) if report_only => print_json(&response.data.report),
        Ok(response) => print_json(&response),
        Err(e) => Err(e),
    };

    match printed {
        Ok(()) => 0,
        Err(e) => fail(&e, Some(league_id), Some(week)),
    }
}

async fn run_script(config: &Config, league_id: Option<LeagueId>, week: Option<Week>) -> i32 {
    let league_id = match resolve_league_id(league_id) {
        Ok(id) => id,
        Err(e) => return fail(&e, None, week),
    };
    let week = resolve_week(week, config, Utc::now());

    let mut phrases = RandomPhrases::new();
    match handle_generate_script(&league_id, week, config, &mut phrases).await {
        Ok(script) => {
            println!("{script}");
            0
        }
        Err(e) => fail(&e, Some(league_id), Some(week)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Log the failure, print the error envelope and return the exit status.
fn fail(err: &RecapError, league_id: Option<LeagueId>, week: Option<Week>) -> i32 {
    match err.class() {
        ErrorClass::InternalFailure => error!(error = %err, "command failed"),
        _ => warn!(error = %err, status = err.status_code(), "command rejected"),
    }

    let envelope = ErrorResponse::new(err, league_id, week);
    match serde_json::to_string_pretty(&envelope) {
        Ok(body) => println!("{body}"),
        Err(e) => error!(error = %e, "could not serialize error envelope"),
    }

    err.exit_code()
}
