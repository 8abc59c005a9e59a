//! Lookup tables derived from the player catalog.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    sleeper::types::{PlayerCatalog, PlayerRecord},
    PlayerId,
};

/// Injury status Sleeper uses for healthy players.
pub const ACTIVE_STATUS: &str = "Active";

/// What the injury report needs to know about one injured player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerInjuryRecord {
    pub full_name: Option<String>,
    pub injury_status: String,
    pub injury_body_part: Option<String>,
    /// NFL team abbreviation; `None` means free agent.
    pub team: Option<String>,
}

/// `id -> name` and `id -> injury` views over one catalog.
///
/// Injuries keep catalog order, which is also the order the reports list them in.
#[derive(Debug, Clone, Default)]
pub struct PlayerIndex {
    names: HashMap<PlayerId, String>,
    injuries: Vec<(PlayerId, PlayerInjuryRecord)>,
}

impl PlayerIndex {
    pub fn build(catalog: &PlayerCatalog) -> Self {
        let mut names = HashMap::new();
        let mut injuries = Vec::new();

        for (id, record) in catalog.iter() {
            let Some(record) = record else {
                continue;
            };

            if let Some(name) = display_name(record) {
                names.insert(id.clone(), name.to_string());
            }
            if let Some(injury) = injury_record(record) {
                injuries.push((id.clone(), injury));
            }
        }

        Self { names, injuries }
    }

    pub fn name(&self, id: &PlayerId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    #[cfg(test)]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    pub fn injuries(&self) -> impl Iterator<Item = (&PlayerId, &PlayerInjuryRecord)> {
        self.injuries.iter().map(|(id, rec)| (id, rec))
    }

    pub fn injured_count(&self) -> usize {
        self.injuries.len()
    }
}

fn display_name(record: &PlayerRecord) -> Option<&str> {
    record.full_name.as_deref().filter(|n| !n.is_empty())
}

fn injury_record(record: &PlayerRecord) -> Option<PlayerInjuryRecord> {
    let status = record.injury_status.as_deref()?;
    if status == ACTIVE_STATUS {
        return None;
    }
    Some(PlayerInjuryRecord {
        full_name: record.full_name.clone(),
        injury_status: status.to_string(),
        injury_body_part: record.injury_body_part.clone(),
        team: record.team.clone(),
    })
}
