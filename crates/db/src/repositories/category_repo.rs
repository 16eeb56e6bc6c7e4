//! Repository for the `categories` table.

use matchtag_core::category::Category;
use matchtag_core::types::EntityId;
use sqlx::PgExecutor;

use crate::models::category::CategoryRow;

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name";

pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in insertion order.
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY seq ASC");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Find a category by ID, locking the row until the transaction ends.
    pub async fn find_for_update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: EntityId,
    ) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Return which of `ids` exist, holding a share lock on them so a
    /// concurrent delete waits for the caller's transaction.
    pub async fn lock_existing<'e, E: PgExecutor<'e>>(
        executor: E,
        ids: &[EntityId],
    ) -> Result<Vec<EntityId>, sqlx::Error> {
        let rows: Vec<(EntityId,)> =
            sqlx::query_as("SELECT id FROM categories WHERE id = ANY($1) FOR SHARE")
                .bind(ids)
                .fetch_all(executor)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Insert an already-validated category.
    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        category: &Category,
    ) -> Result<CategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(category.id)
            .bind(&category.name)
            .fetch_one(executor)
            .await
    }

    /// Overwrite the mutable columns of a category.
    ///
    /// Returns `None` if no category with the given ID exists.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        category: &Category,
    ) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(category.id)
            .bind(&category.name)
            .fetch_optional(executor)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// Tags referencing the category are untouched.
    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
