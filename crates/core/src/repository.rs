//! The storage contract shared by every backing store.
//!
//! Implemented by [`crate::memory::MemoryRepository`] and by the Postgres
//! store in `matchtag-db`. Both must behave identically for the same
//! sequence of calls; `crate::conformance` checks that.

use async_trait::async_trait;

use crate::category::{Category, CreateCategory, UpdateCategory};
use crate::error::CoreResult;
use crate::player::{CreatePlayer, Player, UpdatePlayer};
use crate::tag::{CreateTag, Tag, UpdateTag};
use crate::types::EntityId;

/// CRUD over categories, players and tags.
///
/// Updates are last-write-wins; there is no concurrency token. Each call is
/// atomic at the storage layer.
#[async_trait]
pub trait Repository: Send + Sync {
    // -- Categories ---------------------------------------------------------

    /// List categories in insertion order.
    async fn list_categories(&self) -> CoreResult<Vec<Category>>;

    /// Fails with `DuplicateName` if the name is taken.
    async fn create_category(&self, input: &CreateCategory) -> CoreResult<Category>;

    async fn update_category(&self, id: EntityId, input: &UpdateCategory) -> CoreResult<Category>;

    /// Returns `false` if no such category exists.
    ///
    /// Tags referencing the category are left in place with a dangling id.
    async fn delete_category(&self, id: EntityId) -> CoreResult<bool>;

    // -- Players ------------------------------------------------------------

    /// List players in insertion order.
    async fn list_players(&self) -> CoreResult<Vec<Player>>;

    async fn create_player(&self, input: &CreatePlayer) -> CoreResult<Player>;

    async fn update_player(&self, id: EntityId, input: &UpdatePlayer) -> CoreResult<Player>;

    /// Returns `false` if no such player exists. Does not touch tags.
    async fn delete_player(&self, id: EntityId) -> CoreResult<bool>;

    // -- Tags ---------------------------------------------------------------

    /// List tags ascending by timestamp; ties keep insertion order.
    async fn list_tags(&self) -> CoreResult<Vec<Tag>>;

    async fn get_tag(&self, id: EntityId) -> CoreResult<Tag>;

    /// Validates the draft, assigns `id` and `created_at`.
    async fn create_tag(&self, input: &CreateTag) -> CoreResult<Tag>;

    /// Merges the partial update; `created_at` never changes.
    async fn update_tag(&self, id: EntityId, input: &UpdateTag) -> CoreResult<Tag>;

    async fn delete_tag(&self, id: EntityId) -> CoreResult<bool>;
}
