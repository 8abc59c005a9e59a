//! Week numbers and the NFL calendar.

use crate::error::{RecapError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last week of the NFL regular season.
pub const LAST_REGULAR_SEASON_WEEK: u16 = 18;

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The following week; next-week matchups are fetched from here.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Approximate regular-season week for `now`, given the Week 1 kickoff date.
    ///
    /// Anything before kickoff is week 1; the result is clamped to `1..=18`.
    pub fn current(now: DateTime<Utc>, kickoff: NaiveDate) -> Self {
        let days = (now.date_naive() - kickoff).num_days();
        let week = if days < 0 { 1 } else { days / 7 + 1 };
        Self(week.clamp(1, LAST_REGULAR_SEASON_WEEK as i64) as u16)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = RecapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u16>() {
            Ok(w) if w >= 1 => Ok(Self(w)),
            _ => Err(RecapError::InvalidWeek {
                value: s.to_string(),
            }),
        }
    }
}
