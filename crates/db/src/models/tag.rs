use matchtag_core::player_ids::normalize_player_ids;
use matchtag_core::tag::Tag;
use matchtag_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow)]
pub struct TagRow {
    pub id: EntityId,
    pub timestamp: i64,
    pub category_id: EntityId,
    pub description: String,
    /// Raw column value; elements may be comma-joined legacy lists.
    pub player_ids: Vec<String>,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Self {
            id: row.id,
            timestamp: row.timestamp,
            category_id: row.category_id,
            description: row.description,
            player_ids: normalize_player_ids(row.player_ids.iter().map(String::as_str)),
            video_url: row.video_url,
            created_at: row.created_at,
        }
    }
}

/// Encode a canonical id list for the `player_ids` column.
pub fn encode_player_ids(player_ids: &[EntityId]) -> Vec<String> {
    player_ids.iter().map(EntityId::to_string).collect()
}
