//! Normalization of the player-id list attached to a tag.
//!
//! Two encodings of the same list exist in stored data and request bodies:
//! a native sequence (`["a", "b"]`) and a single comma-joined string
//! (`"a,b"`). Legacy rows sometimes hold a comma-joined string as one
//! element of a sequence. `null`, either for the whole list or for one
//! element, counts as empty. Every reader goes through [`PlayerIds::normalize`]
//! (or [`normalize_player_ids`] for raw column values) so the decode lives in
//! exactly one place.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::EntityId;

/// Separator used by the delimited encoding.
pub const PLAYER_ID_SEPARATOR: char = ',';

/// A player-id list in either of its accepted wire encodings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerIds {
    Sequence(Vec<Option<String>>),
    Delimited(String),
}

impl Default for PlayerIds {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl From<Vec<EntityId>> for PlayerIds {
    fn from(ids: Vec<EntityId>) -> Self {
        Self::from(ids.as_slice())
    }
}

impl From<&[EntityId]> for PlayerIds {
    fn from(ids: &[EntityId]) -> Self {
        Self::Sequence(ids.iter().map(|id| Some(id.to_string())).collect())
    }
}

impl PlayerIds {
    /// Decode into the canonical ordered id sequence.
    ///
    /// Empty and unparseable entries are dropped; order and duplicates are kept.
    pub fn normalize(&self) -> Vec<EntityId> {
        match self {
            Self::Sequence(items) => normalize_player_ids(items.iter().flatten().map(String::as_str)),
            Self::Delimited(joined) => normalize_player_ids(std::iter::once(joined.as_str())),
        }
    }
}

/// Normalize raw stored entries, each of which may itself be comma-joined.
pub fn normalize_player_ids<'a, I>(entries: I) -> Vec<EntityId>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .flat_map(|entry| entry.split(PLAYER_ID_SEPARATOR))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<EntityId>().ok())
        .collect()
}

/// Serde adapter for request DTOs: `null` becomes the empty list.
pub fn deserialize_or_empty<'de, D>(deserializer: D) -> Result<PlayerIds, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PlayerIds>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde adapter: accept either encoding and yield the canonical sequence.
pub fn deserialize_normalized<'de, D>(deserializer: D) -> Result<Vec<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<PlayerIds>::deserialize(deserializer)?;
    Ok(raw.map(|ids| ids.normalize()).unwrap_or_default())
}
