//! Repository for the `players` table.

use matchtag_core::player::Player;
use matchtag_core::types::EntityId;
use sqlx::PgExecutor;

use crate::models::player::PlayerRow;

/// Column list for `players` queries.
const COLUMNS: &str = "id, name, number";

pub struct PlayerRepo;

impl PlayerRepo {
    /// List all players in insertion order.
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<PlayerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players ORDER BY seq ASC");
        sqlx::query_as::<_, PlayerRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Find a player by ID, locking the row until the transaction ends.
    pub async fn find_for_update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: EntityId,
    ) -> Result<Option<PlayerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, PlayerRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert an already-validated player.
    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        player: &Player,
    ) -> Result<PlayerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (id, name, number) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlayerRow>(&query)
            .bind(player.id)
            .bind(&player.name)
            .bind(player.number)
            .fetch_one(executor)
            .await
    }

    /// Overwrite the mutable columns of a player.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        player: &Player,
    ) -> Result<Option<PlayerRow>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET name = $2, number = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlayerRow>(&query)
            .bind(player.id)
            .bind(&player.name)
            .bind(player.number)
            .fetch_optional(executor)
            .await
    }

    /// Delete a player by ID. Returns `true` if a row was deleted.
    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM players")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
