//! Timestamped annotations on a video.

use chrono::SubsecRound;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::player_ids::{deserialize_normalized, deserialize_or_empty, PlayerIds};
use crate::types::{new_id, EntityId, Timestamp, VideoSeconds};

/// A timestamped annotation referencing a category and zero or more players.
///
/// `category_id` and `player_ids` may dangle once the referenced rows are
/// deleted; readers resolve them through the fallbacks in [`crate::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: EntityId,
    pub timestamp: VideoSeconds,
    pub category_id: EntityId,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_normalized")]
    pub player_ids: Vec<EntityId>,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a tag.
///
/// Required fields are `Option` so a missing field surfaces as a
/// [`CoreError::Validation`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTag {
    pub timestamp: Option<VideoSeconds>,
    pub category_id: Option<EntityId>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_or_empty")]
    pub player_ids: PlayerIds,
    pub video_url: Option<String>,
}

/// DTO for a partial tag update. `createdAt` is not updatable.
///
/// An empty `videoUrl` clears the stored URL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTag {
    pub timestamp: Option<VideoSeconds>,
    pub category_id: Option<EntityId>,
    pub description: Option<String>,
    pub player_ids: Option<PlayerIds>,
    pub video_url: Option<String>,
}

/// Validate a tag draft and assign its id and creation instant.
///
/// `existing_category_ids` is the set of categories the draft may reference.
/// An unknown category fails with [`CoreError::NotFound`]; every other
/// problem is a [`CoreError::Validation`].
pub fn validate_tag(input: &CreateTag, existing_category_ids: &[EntityId]) -> CoreResult<Tag> {
    let timestamp = input
        .timestamp
        .ok_or_else(|| CoreError::Validation("timestamp is required".to_string()))
        .and_then(validate_timestamp)?;

    let category_id = input
        .category_id
        .ok_or_else(|| CoreError::Validation("categoryId is required".to_string()))?;
    ensure_category_exists(category_id, existing_category_ids)?;

    let description = validate_description(input.description.as_deref().unwrap_or_default())?;

    Ok(Tag {
        id: new_id(),
        timestamp,
        category_id,
        description,
        player_ids: input.player_ids.normalize(),
        video_url: normalize_video_url(input.video_url.as_deref()),
        // Postgres keeps microseconds; truncate so both stores agree.
        created_at: chrono::Utc::now().trunc_subsecs(6),
    })
}

/// Merge a partial update onto `current` and re-validate the result.
///
/// The category reference is only checked when the update changes it, so a
/// tag whose category was deleted can still be edited.
pub fn apply_tag_update(
    current: &Tag,
    input: &UpdateTag,
    existing_category_ids: &[EntityId],
) -> CoreResult<Tag> {
    let mut updated = current.clone();

    if let Some(timestamp) = input.timestamp {
        updated.timestamp = validate_timestamp(timestamp)?;
    }
    if let Some(category_id) = input.category_id {
        if category_id != current.category_id {
            ensure_category_exists(category_id, existing_category_ids)?;
        }
        updated.category_id = category_id;
    }
    if let Some(description) = &input.description {
        updated.description = validate_description(description)?;
    }
    if let Some(player_ids) = &input.player_ids {
        updated.player_ids = player_ids.normalize();
    }
    if let Some(video_url) = &input.video_url {
        updated.video_url = normalize_video_url(Some(video_url));
    }

    Ok(updated)
}

fn validate_timestamp(timestamp: VideoSeconds) -> CoreResult<VideoSeconds> {
    if timestamp < 0 {
        return Err(CoreError::Validation(format!(
            "timestamp must be a non-negative number of seconds, got {timestamp}"
        )));
    }
    Ok(timestamp)
}

fn validate_description(description: &str) -> CoreResult<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn ensure_category_exists(category_id: EntityId, existing: &[EntityId]) -> CoreResult<()> {
    if existing.contains(&category_id) {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })
    }
}

fn normalize_video_url(url: Option<&str>) -> Option<String> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn draft(category_id: EntityId) -> CreateTag {
        CreateTag {
            timestamp: Some(125),
            category_id: Some(category_id),
            description: Some("nice".into()),
            player_ids: PlayerIds::default(),
            video_url: None,
        }
    }

    #[test]
    fn valid_draft_keeps_input_fields() {
        let category = new_id();
        let player = new_id();
        let input = CreateTag {
            player_ids: PlayerIds::from(vec![player]),
            video_url: Some(" https://example.com/match.mp4 ".into()),
            ..draft(category)
        };

        let tag = validate_tag(&input, &[category]).unwrap();
        assert_eq!(tag.timestamp, 125);
        assert_eq!(tag.category_id, category);
        assert_eq!(tag.description, "nice");
        assert_eq!(tag.player_ids, vec![player]);
        assert_eq!(tag.video_url.as_deref(), Some("https://example.com/match.mp4"));
    }

    #[test]
    fn missing_timestamp_rejected() {
        let category = new_id();
        let input = CreateTag {
            timestamp: None,
            ..draft(category)
        };
        assert_matches!(validate_tag(&input, &[category]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_timestamp_rejected() {
        let category = new_id();
        let input = CreateTag {
            timestamp: Some(-1),
            ..draft(category)
        };
        assert_matches!(validate_tag(&input, &[category]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_category_is_not_found() {
        let category = new_id();
        assert_matches!(
            validate_tag(&draft(category), &[new_id()]),
            Err(CoreError::NotFound { entity: "Category", id }) if id == category
        );
    }

    #[test]
    fn missing_category_is_validation_error() {
        let input = CreateTag {
            category_id: None,
            ..draft(new_id())
        };
        assert_matches!(validate_tag(&input, &[]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn whitespace_description_rejected() {
        let category = new_id();
        let input = CreateTag {
            description: Some("  \t ".into()),
            ..draft(category)
        };
        assert_matches!(validate_tag(&input, &[category]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_video_url_becomes_none() {
        let category = new_id();
        let input = CreateTag {
            video_url: Some("   ".into()),
            ..draft(category)
        };
        assert_eq!(validate_tag(&input, &[category]).unwrap().video_url, None);
    }

    #[test]
    fn delimited_player_ids_are_normalized() {
        let category = new_id();
        let (a, b) = (new_id(), new_id());
        let input = CreateTag {
            player_ids: PlayerIds::Delimited(format!("{a}, ,{b}")),
            ..draft(category)
        };
        assert_eq!(validate_tag(&input, &[category]).unwrap().player_ids, vec![a, b]);
    }

    #[test]
    fn update_merges_and_preserves_created_at() {
        let category = new_id();
        let tag = validate_tag(&draft(category), &[category]).unwrap();
        let input = UpdateTag {
            description: Some("better".into()),
            ..Default::default()
        };

        let updated = apply_tag_update(&tag, &input, &[category]).unwrap();
        assert_eq!(updated.description, "better");
        assert_eq!(updated.timestamp, tag.timestamp);
        assert_eq!(updated.created_at, tag.created_at);
        assert_eq!(updated.id, tag.id);
    }

    #[test]
    fn update_with_dangling_category_unchanged_is_allowed() {
        let category = new_id();
        let tag = validate_tag(&draft(category), &[category]).unwrap();
        let input = UpdateTag {
            category_id: Some(category),
            timestamp: Some(3),
            ..Default::default()
        };
        assert!(apply_tag_update(&tag, &input, &[]).is_ok());
    }

    #[test]
    fn update_to_unknown_category_is_not_found() {
        let category = new_id();
        let tag = validate_tag(&draft(category), &[category]).unwrap();
        let input = UpdateTag {
            category_id: Some(new_id()),
            ..Default::default()
        };
        assert_matches!(
            apply_tag_update(&tag, &input, &[category]),
            Err(CoreError::NotFound { .. })
        );
    }

    #[test]
    fn update_with_empty_video_url_clears_it() {
        let category = new_id();
        let input = CreateTag {
            video_url: Some("https://example.com/v.mp4".into()),
            ..draft(category)
        };
        let tag = validate_tag(&input, &[category]).unwrap();
        let update = UpdateTag {
            video_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply_tag_update(&tag, &update, &[category]).unwrap().video_url, None);
    }

    #[test]
    fn tag_json_accepts_delimited_player_ids() {
        let (a, b) = (new_id(), new_id());
        let json = serde_json::json!({
            "id": new_id(),
            "timestamp": 10,
            "categoryId": new_id(),
            "description": "legacy row",
            "playerIds": format!("{a},{b}"),
            "videoUrl": null,
            "createdAt": "2024-03-01T12:00:00Z",
        });
        let tag: Tag = serde_json::from_value(json).unwrap();
        assert_eq!(tag.player_ids, vec![a, b]);
    }

    #[test]
    fn create_tag_json_tolerates_null_player_ids() {
        let (category, player) = (new_id(), new_id());
        let null_list: CreateTag = serde_json::from_value(serde_json::json!({
            "timestamp": 1,
            "categoryId": category,
            "description": "d",
            "playerIds": null,
        }))
        .unwrap();
        assert!(validate_tag(&null_list, &[category]).unwrap().player_ids.is_empty());

        let null_entry: CreateTag = serde_json::from_value(serde_json::json!({
            "timestamp": 1,
            "categoryId": category,
            "description": "d",
            "playerIds": [null, player],
        }))
        .unwrap();
        assert_eq!(
            validate_tag(&null_entry, &[category]).unwrap().player_ids,
            vec![player]
        );
    }
}
