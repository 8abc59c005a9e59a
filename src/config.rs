//! Runtime configuration, loaded once from the environment and passed down explicitly.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::report::{ReportPolicy, TieBreak};

/// Public Sleeper API root.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Per-request timeout used when `SLEEPER_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for the Sleeper source client.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: SLEEPER_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("sleeper-recap/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SourceConfig {
    /// Source settings pointing at another base URL (mock servers, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub policy: ReportPolicy,
    /// Week 1 kickoff, used to guess the current week when none is given.
    pub season_kickoff: NaiveDate,
    /// Root directory the filesystem publisher writes into.
    pub reports_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            policy: ReportPolicy::default(),
            season_kickoff: default_kickoff(),
            reports_dir: default_reports_dir(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` and environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();
        let default_policy = defaults.policy;

        let timeout_secs: u64 = parse_var("SLEEPER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let ties_favor_first: bool = parse_var("RECAP_TIES_FAVOR_FIRST", false)?;

        Ok(Config {
            source: SourceConfig {
                base_url: env::var("SLEEPER_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.source.base_url),
                timeout: Duration::from_secs(timeout_secs),
                user_agent: defaults.source.user_agent,
            },

            policy: ReportPolicy {
                blowout_threshold: parse_var(
                    "RECAP_BLOWOUT_THRESHOLD",
                    default_policy.blowout_threshold,
                )?,
                blowout_inclusive: parse_var(
                    "RECAP_BLOWOUT_INCLUSIVE",
                    default_policy.blowout_inclusive,
                )?,
                close_threshold: parse_var("RECAP_CLOSE_THRESHOLD", default_policy.close_threshold)?,
                tie_break: if ties_favor_first {
                    TieBreak::FavorFirst
                } else {
                    TieBreak::NoWinner
                },
            },

            season_kickoff: match env::var("RECAP_SEASON_KICKOFF") {
                Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .context("RECAP_SEASON_KICKOFF must be a YYYY-MM-DD date")?,
                Err(_) => defaults.season_kickoff,
            },

            reports_dir: env::var("RECAP_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
        })
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn default_kickoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 4).unwrap_or_default()
}

/// Path: ~/.local/share/sleeper-recap/reports (platform data dir)
pub fn default_reports_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("sleeper-recap").join("reports")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.base_url, SLEEPER_BASE_URL);
        assert_eq!(config.source.timeout, Duration::from_secs(15));
        assert_eq!(config.policy.blowout_threshold, 30.0);
        assert!(!config.policy.blowout_inclusive);
        assert_eq!(config.policy.close_threshold, 5.0);
        assert_eq!(config.policy.tie_break, TieBreak::NoWinner);
        assert_eq!(
            config.season_kickoff,
            NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()
        );
        assert!(config.reports_dir.ends_with("sleeper-recap/reports"));
    }

    #[test]
    fn test_with_base_url_keeps_other_defaults() {
        let source = SourceConfig::with_base_url("http://127.0.0.1:9999");
        assert_eq!(source.base_url, "http://127.0.0.1:9999");
        assert_eq!(source.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(source.user_agent.starts_with("sleeper-recap/"));
    }

    // All env-dependent assertions live in one test so parallel tests
    // never observe each other's variables.
    #[test]
    fn test_from_env_overrides_and_errors() {
        env::set_var("SLEEPER_API_URL", "http://localhost:8080/v1/");
        env::set_var("SLEEPER_TIMEOUT_SECS", "3");
        env::set_var("RECAP_BLOWOUT_THRESHOLD", "25.5");
        env::set_var("RECAP_BLOWOUT_INCLUSIVE", "true");
        env::set_var("RECAP_TIES_FAVOR_FIRST", "true");
        env::set_var("RECAP_SEASON_KICKOFF", "2026-09-10");
        env::set_var("RECAP_REPORTS_DIR", "/tmp/recaps");

        let config = Config::from_env().unwrap();
        assert_eq!(config.source.base_url, "http://localhost:8080/v1");
        assert_eq!(config.source.timeout, Duration::from_secs(3));
        assert_eq!(config.policy.blowout_threshold, 25.5);
        assert!(config.policy.blowout_inclusive);
        assert_eq!(config.policy.tie_break, TieBreak::FavorFirst);
        assert_eq!(
            config.season_kickoff,
            NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()
        );
        assert_eq!(config.reports_dir, PathBuf::from("/tmp/recaps"));

        env::set_var("SLEEPER_TIMEOUT_SECS", "soon");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SLEEPER_TIMEOUT_SECS"));

        for key in [
            "SLEEPER_API_URL",
            "SLEEPER_TIMEOUT_SECS",
            "RECAP_BLOWOUT_THRESHOLD",
            "RECAP_BLOWOUT_INCLUSIVE",
            "RECAP_TIES_FAVOR_FIRST",
            "RECAP_SEASON_KICKOFF",
            "RECAP_REPORTS_DIR",
        ] {
            env::remove_var(key);
        }
    }
}
