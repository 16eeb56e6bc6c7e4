//! Repository for the `tags` table.

use matchtag_core::tag::Tag;
use matchtag_core::types::EntityId;
use sqlx::PgExecutor;

use crate::models::tag::{encode_player_ids, TagRow};

/// Column list for `tags` queries.
const COLUMNS: &str = "\
    id, timestamp, category_id, description, player_ids, video_url, created_at";

pub struct TagRepo;

impl TagRepo {
    /// List all tags ascending by timestamp; ties in insertion order.
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<TagRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY timestamp ASC, seq ASC");
        sqlx::query_as::<_, TagRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Find a tag by its ID.
    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: EntityId,
    ) -> Result<Option<TagRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, TagRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a tag by ID, locking the row until the transaction ends.
    pub async fn find_for_update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: EntityId,
    ) -> Result<Option<TagRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, TagRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert an already-validated tag, including its assigned `created_at`.
    pub async fn insert<'e, E: PgExecutor<'e>>(executor: E, tag: &Tag) -> Result<TagRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags \
                (id, timestamp, category_id, description, player_ids, video_url, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TagRow>(&query)
            .bind(tag.id)
            .bind(tag.timestamp)
            .bind(tag.category_id)
            .bind(&tag.description)
            .bind(encode_player_ids(&tag.player_ids))
            .bind(&tag.video_url)
            .bind(tag.created_at)
            .fetch_one(executor)
            .await
    }

    /// Overwrite the mutable columns of a tag. `created_at` is never written.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        tag: &Tag,
    ) -> Result<Option<TagRow>, sqlx::Error> {
        let query = format!(
            "UPDATE tags SET \
                timestamp = $2, \
                category_id = $3, \
                description = $4, \
                player_ids = $5, \
                video_url = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TagRow>(&query)
            .bind(tag.id)
            .bind(tag.timestamp)
            .bind(tag.category_id)
            .bind(&tag.description)
            .bind(encode_player_ids(&tag.player_ids))
            .bind(&tag.video_url)
            .fetch_optional(executor)
            .await
    }

    /// Delete a tag by ID. Returns `true` if a row was deleted.
    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
