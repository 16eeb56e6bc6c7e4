//! Tag categories ("Goal", "Turnover", ...).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{new_id, EntityId};

/// A named classification for tags. Names are unique across categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// DTO for renaming a category. A missing `name` leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

/// Validate a new category name against the current categories.
///
/// The stored name is trimmed. Duplicate detection is an exact,
/// case-sensitive match on the trimmed name.
pub fn validate_category(name: &str, existing: &[Category]) -> CoreResult<Category> {
    let name = validate_name(name, existing, None)?;
    Ok(Category { id: new_id(), name })
}

/// Apply a partial update to `current`, re-validating a changed name.
pub fn apply_category_update(
    current: &Category,
    input: &UpdateCategory,
    existing: &[Category],
) -> CoreResult<Category> {
    let mut updated = current.clone();
    if let Some(name) = &input.name {
        updated.name = validate_name(name, existing, Some(current.id))?;
    }
    Ok(updated)
}

fn validate_name(name: &str, existing: &[Category], except: Option<EntityId>) -> CoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "category name must not be empty".to_string(),
        ));
    }
    let taken = existing
        .iter()
        .any(|c| Some(c.id) != except && c.name == trimmed);
    if taken {
        return Err(CoreError::DuplicateName(format!(
            "a category named '{trimmed}' already exists"
        )));
    }
    Ok(trimmed.to_string())
}
