//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{LeagueId, Week};

#[derive(Debug, Subcommand)]
pub enum GenerateCmd {
    /// Build the structured JSON report and print the response envelope.
    ///
    /// Fetches league, rosters, users, matchups and the player catalog from
    /// Sleeper. With `--push` the report is also written through the publisher.
    Report {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Week to report on. Defaults to the current NFL week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Publish the report after building it.
        #[clap(long)]
        push: bool,

        /// Directory inside the reports root to publish into.
        #[clap(long, requires = "push")]
        destination: Option<String>,

        /// Print only the report instead of the full envelope.
        #[clap(long)]
        report_only: bool,
    },

    /// Render the narrative weekly script as plain text.
    Script {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Week to report on. Defaults to the current NFL week.
        #[clap(long, short)]
        week: Option<Week>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-recap", about = "Weekly recaps for Sleeper fantasy football leagues")]
pub struct Recap {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a weekly recap
    Generate {
        #[clap(subcommand)]
        cmd: GenerateCmd,
    },

    /// Print the current NFL regular-season week
    CurrentWeek,
}
