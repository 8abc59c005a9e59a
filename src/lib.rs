//! Sleeper Fantasy Football Recap Library
//!
//! Turns one week of a Sleeper league into two artifacts: an on-air style
//! narrative script and a structured JSON report for downstream consumers.
//!
//! ## Pipeline
//!
//! - **Source Client** ([`sleeper::SleeperClient`]): fetches league, rosters,
//!   users, matchups, the player catalog and trending lists. Optional
//!   endpoints degrade to empty data instead of failing the run.
//! - **Player Index** ([`sleeper::PlayerIndex`]): id to name lookups and the
//!   list of injured players, in catalog order.
//! - **Matchup Grouper** ([`sleeper::group_matchups`]): pairs team records by
//!   matchup id.
//! - **Report Synthesizer** ([`report`]): the narrative script and the
//!   structured report, both classified by the same [`report::ReportPolicy`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_recap::{
//!     config::Config, report::build_structured_report, sleeper::SleeperClient, LeagueId, Week,
//! };
//!
//! # async fn example() -> sleeper_recap::Result<()> {
//! let config = Config::default();
//! let client = SleeperClient::new(&config.source)?;
//! let league_id = LeagueId::new("784512236517302272");
//!
//! let snapshot = client.fetch_snapshot(&league_id, Week::new(5)).await?;
//! let report = build_structured_report(&snapshot, Week::new(5), &config.policy, chrono::Utc::now())?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_LEAGUE_ID=784512236517302272
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod publish;
pub mod report;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Week};
pub use error::{RecapError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
