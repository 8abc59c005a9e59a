//! Sleeper API access and the data derived from it
//!
//! - `http`: endpoint definitions, tagged fetch outcomes and the client
//! - `types`: upstream payload shapes
//! - `players`: name and injury lookups built from the player catalog
//! - `matchups`: grouping of team records into head-to-head pairings
//! - `snapshot`: one fetch cycle's immutable result

pub mod http;
pub mod matchups;
pub mod players;
pub mod snapshot;
pub mod types;

pub use http::{Endpoint, FetchOutcome, FetchPolicy, SleeperClient};
pub use matchups::{group_matchups, MatchupGroup, MatchupGroups};
pub use players::{PlayerIndex, PlayerInjuryRecord};
pub use snapshot::{LeagueSnapshot, SnapshotParts};
