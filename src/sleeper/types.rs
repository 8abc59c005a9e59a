use crate::PlayerId;
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Value};
use std::fmt;


fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any non-string value (number, list, object, null) reads as absent.
fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// `GET league/{league_id}`; only the name is interpreted, the rest rides along.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueDetails {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub settings: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `GET league/{league_id}/rosters`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterRecord {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// One entry of `GET league/{league_id}/users`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserRecord {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One team's side of a matchup from `GET league/{league_id}/matchups/{week}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamMatchupRecord {
    /// Shared by the two teams facing each other; null during bye weeks.
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub roster_id: Option<u32>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub points: f64,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub starters: Vec<PlayerId>,
}

/// One entry of `GET players/nfl/trending/{add,drop}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrendingPlayer {
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub count: u64,
}

/// The attributes of a catalog entry this crate reads.
///
/// Every field is lenient: a value of the wrong type is treated as missing
/// instead of rejecting the whole entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerRecord {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub injury_status: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub injury_body_part: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub team: Option<String>,
}

/// `GET players/nfl`: every NFL player keyed by id, in the order Sleeper sent them.
///
/// Entries whose value is not an object are kept as `None` so they still
/// count as catalog entries but never resolve to a name or an injury.
#[derive(Debug, Clone, Default)]
pub struct PlayerCatalog {
    entries: Vec<(PlayerId, Option<PlayerRecord>)>,
}

impl PlayerCatalog {
    pub fn new(entries: Vec<(PlayerId, Option<PlayerRecord>)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, Option<&PlayerRecord>)> {
        self.entries.iter().map(|(id, rec)| (id, rec.as_ref()))
    }
}

impl FromIterator<(PlayerId, PlayerRecord)> for PlayerCatalog {
    fn from_iter<I: IntoIterator<Item = (PlayerId, PlayerRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, rec)| (id, Some(rec))).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for PlayerCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = PlayerCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of player id to player attributes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, raw)) = map.next_entry::<String, Value>()? {
                    let record = match raw {
                        Value::Object(_) => serde_json::from_value::<PlayerRecord>(raw).ok(),
                        _ => None,
                    };
                    entries.push((PlayerId::new(id), record));
                }
                Ok(PlayerCatalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
