//! ID types for Sleeper leagues and players.

use crate::error::{RecapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper hands out 18-digit snowflake IDs and always transports them as
/// strings, so the wrapper keeps them as strings too.
///
/// # Examples
///
/// ```rust
/// use sleeper_recap::LeagueId;
///
/// let league_id: LeagueId = "784512236517302272".parse().unwrap();
/// assert_eq!(league_id.as_str(), "784512236517302272");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = RecapError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.contains('/') || trimmed.chars().any(char::is_whitespace)
        {
            return Err(RecapError::InvalidLeagueId {
                value: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for Sleeper player IDs (`"4046"`, or team codes like `"KC"` for defenses).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_parse_trims() {
        let id: LeagueId = "  12345 ".parse().unwrap();
        assert_eq!(id.as_str(), "12345");
        assert_eq!(id.to_string(), "12345");
    }

    #[test]
    fn test_league_id_rejects_empty_and_paths() {
        assert!("".parse::<LeagueId>().is_err());
        assert!("   ".parse::<LeagueId>().is_err());
        assert!("123/rosters".parse::<LeagueId>().is_err());
        assert!("12 34".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_player_id_serde_transparent() {
        let id: PlayerId = serde_json::from_str("\"4046\"").unwrap();
        assert_eq!(id, PlayerId::new("4046"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"4046\"");
    }
}
