//! [`Repository`] implementation backed by PostgreSQL.

use async_trait::async_trait;
use matchtag_core::category::{apply_category_update, validate_category, Category, CreateCategory, UpdateCategory};
use matchtag_core::error::{CoreError, CoreResult};
use matchtag_core::player::{apply_player_update, validate_player, CreatePlayer, Player, UpdatePlayer};
use matchtag_core::repository::Repository;
use matchtag_core::tag::{apply_tag_update, validate_tag, CreateTag, Tag, UpdateTag};
use matchtag_core::types::EntityId;

use crate::error::classify;
use crate::repositories::{CategoryRepo, PlayerRepo, TagRepo};
use crate::seed::seed_defaults;
use crate::DbPool;

/// Durable store. Cheap to clone; all clones share the pool.
///
/// Read-validate-write operations run in a transaction with the affected
/// rows locked, so each call is atomic.
#[derive(Clone)]
pub struct PgRepository {
    pool: DbPool,
}

impl PgRepository {
    /// Wrap a pool without touching its contents.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Wrap a pool and seed default categories and players into empty tables.
    pub async fn initialize(pool: DbPool) -> CoreResult<Self> {
        seed_defaults(&pool).await.map_err(classify)?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_categories(&self) -> CoreResult<Vec<Category>> {
        let rows = CategoryRepo::list(&self.pool).await.map_err(classify)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn create_category(&self, input: &CreateCategory) -> CoreResult<Category> {
        let mut tx = self.pool.begin().await.map_err(classify)?;
        let existing: Vec<Category> = CategoryRepo::list(&mut *tx)
            .await
            .map_err(classify)?
            .into_iter()
            .map(Category::from)
            .collect();
        let category = validate_category(&input.name, &existing)?;
        let row = CategoryRepo::insert(&mut *tx, &category).await.map_err(classify)?;
        tx.commit().await.map_err(classify)?;
        Ok(row.into())
    }

    async fn update_category(&self, id: EntityId, input: &UpdateCategory) -> CoreResult<Category> {
        let mut tx = self.pool.begin().await.map_err(classify)?;
        let current: Category = CategoryRepo::find_for_update(&mut *tx, id)
            .await
            .map_err(classify)?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?
            .into();
        let existing: Vec<Category> = CategoryRepo::list(&mut *tx)
            .await
            .map_err(classify)?
            .into_iter()
            .map(Category::from)
            .collect();
        let updated = apply_category_update(&current, input, &existing)?;
        let row = CategoryRepo::update(&mut *tx, &updated)
            .await
            .map_err(classify)?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;
        tx.commit().await.map_err(classify)?;
        Ok(row.into())
    }

    async fn delete_category(&self, id: EntityId) -> CoreResult<bool> {
        CategoryRepo::delete(&self.pool, id).await.map_err(classify)
    }

    async fn list_players(&self) -> CoreResult<Vec<Player>> {
        let rows = PlayerRepo::list(&self.pool).await.map_err(classify)?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn create_player(&self, input: &CreatePlayer) -> CoreResult<Player> {
        let player = validate_player(&input.name, input.number)?;
        let row = PlayerRepo::insert(&self.pool, &player).await.map_err(classify)?;
        Ok(row.into())
    }

    async fn update_player(&self, id: EntityId, input: &UpdatePlayer) -> CoreResult<Player> {
        let mut tx = self.pool.begin().await.map_err(classify)?;
        let current: Player = PlayerRepo::find_for_update(&mut *tx, id)
            .await
            .map_err(classify)?
            .ok_or(CoreError::NotFound { entity: "Player", id })?
            .into();
        let updated = apply_player_update(&current, input)?;
        let row = PlayerRepo::update(&mut *tx, &updated)
            .await
            .map_err(classify)?
            .ok_or(CoreError::NotFound { entity: "Player", id })?;
        tx.commit().await.map_err(classify)?;
        Ok(row.into())
    }

    async fn delete_player(&self, id: EntityId) -> CoreResult<bool> {
        PlayerRepo::delete(&self.pool, id).await.map_err(classify)
    }

    async fn list_tags(&self) -> CoreResult<Vec<Tag>> {
        let rows = TagRepo::list(&self.pool).await.map_err(classify)?;
        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn get_tag(&self, id: EntityId) -> CoreResult<Tag> {
        TagRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify)?
            .map(Tag::from)
            .ok_or(CoreError::NotFound { entity: "Tag", id })
    }

    async fn create_tag(&self, input: &CreateTag) -> CoreResult<Tag> {
        let mut tx = self.pool.begin().await.map_err(classify)?;
        let known = match input.category_id {
            Some(category_id) => CategoryRepo::lock_existing(&mut *tx, &[category_id])
                .await
                .map_err(classify)?,
            None => Vec::new(),
        };
        let tag = validate_tag(input, &known)?;
        let row = TagRepo::insert(&mut *tx, &tag).await.map_err(classify)?;
        tx.commit().await.map_err(classify)?;
        Ok(row.into())
    }

    async fn update_tag(&self, id: EntityId, input: &UpdateTag) -> CoreResult<Tag> {
        let mut tx = self.pool.begin().await.map_err(classify)?;
        let current: Tag = TagRepo::find_for_update(&mut *tx, id)
            .await
            .map_err(classify)?
            .ok_or(CoreError::NotFound { entity: "Tag", id })?
            .into();
        let known = match input.category_id {
            Some(category_id) => CategoryRepo::lock_existing(&mut *tx, &[category_id])
                .await
                .map_err(classify)?,
            None => Vec::new(),
        };
        let updated = apply_tag_update(&current, input, &known)?;
        let row = TagRepo::update(&mut *tx, &updated)
            .await
            .map_err(classify)?
            .ok_or(CoreError::NotFound { entity: "Tag", id })?;
        tx.commit().await.map_err(classify)?;
        Ok(row.into())
    }

    async fn delete_tag(&self, id: EntityId) -> CoreResult<bool> {
        TagRepo::delete(&self.pool, id).await.map_err(classify)
    }
}
