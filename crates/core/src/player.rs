//! Roster entries.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{new_id, EntityId};

/// A roster entry with a jersey number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub name: String,
    pub number: i32,
}

impl Player {
    /// Display label used in lists and exports, e.g. `"Ann (#7)"`.
    pub fn label(&self) -> String {
        format!("{} (#{})", self.name, self.number)
    }
}

/// DTO for creating a player.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayer {
    pub name: String,
    pub number: i64,
}

/// DTO for updating a player. Missing fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlayer {
    pub name: Option<String>,
    pub number: Option<i64>,
}

pub fn validate_player(name: &str, number: i64) -> CoreResult<Player> {
    Ok(Player {
        id: new_id(),
        name: validate_name(name)?,
        number: validate_number(number)?,
    })
}

/// Apply a partial update to `current`, validating each supplied field.
pub fn apply_player_update(current: &Player, input: &UpdatePlayer) -> CoreResult<Player> {
    let mut updated = current.clone();
    if let Some(name) = &input.name {
        updated.name = validate_name(name)?;
    }
    if let Some(number) = input.number {
        updated.number = validate_number(number)?;
    }
    Ok(updated)
}

fn validate_name(name: &str) -> CoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "player name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_number(number: i64) -> CoreResult<i32> {
    if number < 0 {
        return Err(CoreError::Validation(format!(
            "player number must be a non-negative integer, got {number}"
        )));
    }
    i32::try_from(number).map_err(|_| {
        CoreError::Validation(format!("player number {number} is out of range"))
    })
}
