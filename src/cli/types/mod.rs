//! Type-safe wrappers for Sleeper league data.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PlayerId};
pub use time::Week;
