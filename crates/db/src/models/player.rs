use matchtag_core::player::Player;
use matchtag_core::types::EntityId;
use sqlx::FromRow;

/// A row from the `players` table.
#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub id: EntityId,
    pub name: String,
    pub number: i32,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            number: row.number,
        }
    }
}
