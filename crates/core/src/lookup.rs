//! Id-to-name joins over storage snapshots.
//!
//! All functions are pure and never fail. Dangling references (ids whose
//! category or player has been deleted) resolve through an explicit
//! fallback instead of an error.

use std::collections::HashMap;

use crate::category::Category;
use crate::player::Player;
use crate::types::EntityId;

/// Category id -> category name.
pub type CategoryIndex = HashMap<EntityId, String>;

/// Player id -> display label (`"{name} (#{number})"`).
pub type PlayerIndex = HashMap<EntityId, String>;

pub fn build_category_index(categories: &[Category]) -> CategoryIndex {
    categories.iter().map(|c| (c.id, c.name.clone())).collect()
}

pub fn build_player_index(players: &[Player]) -> PlayerIndex {
    players.iter().map(|p| (p.id, p.label())).collect()
}

/// Resolve player ids to labels, dropping ids missing from the index.
pub fn resolve_player_ids(player_ids: &[EntityId], index: &PlayerIndex) -> Vec<String> {
    player_ids
        .iter()
        .filter_map(|id| index.get(id).cloned())
        .collect()
}

/// Resolve player ids to labels, keeping the raw id for dangling entries.
pub fn resolve_player_ids_or_raw(player_ids: &[EntityId], index: &PlayerIndex) -> Vec<String> {
    player_ids
        .iter()
        .map(|id| index.get(id).cloned().unwrap_or_else(|| id.to_string()))
        .collect()
}

/// Resolve a category name, falling back to the raw id.
pub fn resolve_category_name(category_id: EntityId, index: &CategoryIndex) -> String {
    index
        .get(&category_id)
        .cloned()
        .unwrap_or_else(|| category_id.to_string())
}

/// Both indices built from one snapshot of categories and players.
#[derive(Debug, Clone, Default)]
pub struct JoinIndex {
    pub categories: CategoryIndex,
    pub players: PlayerIndex,
}

impl JoinIndex {
    pub fn new(categories: &[Category], players: &[Player]) -> Self {
        Self {
            categories: build_category_index(categories),
            players: build_player_index(players),
        }
    }

    pub fn category_name(&self, category_id: EntityId) -> String {
        resolve_category_name(category_id, &self.categories)
    }

    pub fn player_labels(&self, player_ids: &[EntityId]) -> Vec<String> {
        resolve_player_ids(player_ids, &self.players)
    }
}
