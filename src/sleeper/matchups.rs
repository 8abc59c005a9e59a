//! Grouping of per-team matchup records into pairings.

use crate::sleeper::types::TeamMatchupRecord;

/// Records sharing one matchup id, in the order they arrived.
#[derive(Debug, Clone)]
pub struct MatchupGroup<'a> {
    pub matchup_id: u32,
    pub teams: Vec<&'a TeamMatchupRecord>,
}

impl<'a> MatchupGroup<'a> {
    /// The two sides of a well-formed pairing; `None` for any other group size.
    pub fn pairing(&self) -> Option<(&'a TeamMatchupRecord, &'a TeamMatchupRecord)> {
        match self.teams.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Groups keyed by matchup id, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct MatchupGroups<'a> {
    groups: Vec<MatchupGroup<'a>>,
}

impl<'a> MatchupGroups<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, MatchupGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, matchup_id: u32) -> Option<&MatchupGroup<'a>> {
        self.groups.iter().find(|g| g.matchup_id == matchup_id)
    }

    /// Only the groups that form a proper head-to-head.
    pub fn pairings(
        &self,
    ) -> impl Iterator<Item = (u32, &'a TeamMatchupRecord, &'a TeamMatchupRecord)> + '_ {
        self.groups
            .iter()
            .filter_map(|g| g.pairing().map(|(a, b)| (g.matchup_id, a, b)))
    }
}

/// Partition records by matchup id. Records without an id are dropped; nothing else is validated.
pub fn group_matchups(records: &[TeamMatchupRecord]) -> MatchupGroups<'_> {
    let mut groups: Vec<MatchupGroup<'_>> = Vec::new();

    for record in records {
        let Some(matchup_id) = record.matchup_id else {
            continue;
        };
        match groups.iter_mut().find(|g| g.matchup_id == matchup_id) {
            Some(group) => group.teams.push(record),
            None => groups.push(MatchupGroup {
                matchup_id,
                teams: vec![record],
            }),
        }
    }

    MatchupGroups { groups }
}
