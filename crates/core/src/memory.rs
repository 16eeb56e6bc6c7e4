//! In-memory [`Repository`] for tests and ephemeral runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::category::{apply_category_update, validate_category, Category, CreateCategory, UpdateCategory};
use crate::defaults::{DEFAULT_CATEGORIES, DEFAULT_PLAYERS};
use crate::error::{CoreError, CoreResult};
use crate::player::{apply_player_update, validate_player, CreatePlayer, Player, UpdatePlayer};
use crate::repository::Repository;
use crate::tag::{apply_tag_update, validate_tag, CreateTag, Tag, UpdateTag};
use crate::types::{new_id, EntityId};

/// Vectors keep insertion order, which the listing contract exposes.
#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    players: Vec<Player>,
    tags: Vec<Tag>,
}

impl Tables {
    fn category_ids(&self) -> Vec<EntityId> {
        self.categories.iter().map(|c| c.id).collect()
    }
}

/// Vector-backed store. Every operation holds the lock across its
/// read-validate-write step, so calls are atomic.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    /// An empty store with no seed data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store pre-populated with the default categories and players.
    pub fn seeded() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|name| Category {
                id: new_id(),
                name: (*name).to_string(),
            })
            .collect();
        let players = DEFAULT_PLAYERS
            .iter()
            .map(|(name, number)| Player {
                id: new_id(),
                name: (*name).to_string(),
                number: *number,
            })
            .collect();

        Self {
            tables: RwLock::new(Tables {
                categories,
                players,
                tags: Vec::new(),
            }),
        }
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn list_categories(&self) -> CoreResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn create_category(&self, input: &CreateCategory) -> CoreResult<Category> {
        let mut tables = self.tables.write().await;
        let category = validate_category(&input.name, &tables.categories)?;
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: EntityId, input: &UpdateCategory) -> CoreResult<Category> {
        let mut tables = self.tables.write().await;
        let index = tables
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;
        let updated = apply_category_update(&tables.categories[index], input, &tables.categories)?;
        tables.categories[index] = updated.clone();
        Ok(updated)
    }

    async fn delete_category(&self, id: EntityId) -> CoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        Ok(tables.categories.len() != before)
    }

    async fn list_players(&self) -> CoreResult<Vec<Player>> {
        Ok(self.tables.read().await.players.clone())
    }

    async fn create_player(&self, input: &CreatePlayer) -> CoreResult<Player> {
        let player = validate_player(&input.name, input.number)?;
        self.tables.write().await.players.push(player.clone());
        Ok(player)
    }

    async fn update_player(&self, id: EntityId, input: &UpdatePlayer) -> CoreResult<Player> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound { entity: "Player", id })?;
        let updated = apply_player_update(slot, input)?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_player(&self, id: EntityId) -> CoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.players.len();
        tables.players.retain(|p| p.id != id);
        Ok(tables.players.len() != before)
    }

    async fn list_tags(&self) -> CoreResult<Vec<Tag>> {
        let mut tags = self.tables.read().await.tags.clone();
        // Stable sort: equal timestamps keep insertion order.
        tags.sort_by_key(|t| t.timestamp);
        Ok(tags)
    }

    async fn get_tag(&self, id: EntityId) -> CoreResult<Tag> {
        self.tables
            .read()
            .await
            .tags
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "Tag", id })
    }

    async fn create_tag(&self, input: &CreateTag) -> CoreResult<Tag> {
        let mut tables = self.tables.write().await;
        let tag = validate_tag(input, &tables.category_ids())?;
        tables.tags.push(tag.clone());
        Ok(tag)
    }

    async fn update_tag(&self, id: EntityId, input: &UpdateTag) -> CoreResult<Tag> {
        let mut tables = self.tables.write().await;
        let category_ids = tables.category_ids();
        let slot = tables
            .tags
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound { entity: "Tag", id })?;
        let updated = apply_tag_update(slot, input, &category_ids)?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_tag(&self, id: EntityId) -> CoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.tags.len();
        tables.tags.retain(|t| t.id != id);
        Ok(tables.tags.len() != before)
    }
}
