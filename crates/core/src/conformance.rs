//! Behavioural checks every [`Repository`] implementation must pass.
//!
//! Each check expects an empty store and panics on the first mismatch, so
//! implementations call them from their own `#[test]` functions.

use assert_matches::assert_matches;

use crate::category::{CreateCategory, UpdateCategory};
use crate::error::CoreError;
use crate::export::build_export_rows;
use crate::lookup::{build_category_index, resolve_category_name};
use crate::player::{CreatePlayer, UpdatePlayer};
use crate::player_ids::PlayerIds;
use crate::repository::Repository;
use crate::tag::{CreateTag, UpdateTag};
use crate::types::{new_id, EntityId, VideoSeconds};

async fn category(repo: &dyn Repository, name: &str) -> EntityId {
    repo.create_category(&CreateCategory { name: name.into() })
        .await
        .expect("create category")
        .id
}

async fn player(repo: &dyn Repository, name: &str, number: i64) -> EntityId {
    repo.create_player(&CreatePlayer {
        name: name.into(),
        number,
    })
    .await
    .expect("create player")
    .id
}

fn draft(timestamp: VideoSeconds, category_id: EntityId, description: &str) -> CreateTag {
    CreateTag {
        timestamp: Some(timestamp),
        category_id: Some(category_id),
        description: Some(description.into()),
        player_ids: PlayerIds::default(),
        video_url: None,
    }
}

pub async fn category_crud(repo: &dyn Repository) {
    let goal = repo
        .create_category(&CreateCategory { name: " Goal ".into() })
        .await
        .unwrap();
    assert_eq!(goal.name, "Goal");
    let turnover = category(repo, "Turnover").await;

    let names: Vec<_> = repo
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Goal", "Turnover"]);

    let renamed = repo
        .update_category(
            goal.id,
            &UpdateCategory {
                name: Some("Goals".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.id, goal.id);
    assert_eq!(renamed.name, "Goals");

    assert!(repo.delete_category(turnover).await.unwrap());
    assert!(!repo.delete_category(turnover).await.unwrap());
    assert_eq!(repo.list_categories().await.unwrap(), vec![renamed]);
}

pub async fn duplicate_category_name(repo: &dyn Repository) {
    let goal = category(repo, "Goal").await;
    let penalty = category(repo, "Penalty").await;

    assert_matches!(
        repo.create_category(&CreateCategory { name: "Goal".into() }).await,
        Err(CoreError::DuplicateName(_))
    );
    assert_matches!(
        repo.update_category(
            penalty,
            &UpdateCategory {
                name: Some("Goal".into())
            }
        )
        .await,
        Err(CoreError::DuplicateName(_))
    );
    assert_matches!(
        repo.create_category(&CreateCategory { name: "  ".into() }).await,
        Err(CoreError::Validation(_))
    );
    assert_eq!(repo.list_categories().await.unwrap().len(), 2);
    assert!(repo.delete_category(goal).await.unwrap());
}

pub async fn player_crud(repo: &dyn Repository) {
    let ann = player(repo, "Ann", 7).await;
    let bo = player(repo, "Bo", 12).await;

    assert_matches!(
        repo.create_player(&CreatePlayer {
            name: "Neg".into(),
            number: -3
        })
        .await,
        Err(CoreError::Validation(_))
    );

    let updated = repo
        .update_player(
            ann,
            &UpdatePlayer {
                name: None,
                number: Some(10),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.number, 10);

    assert_matches!(
        repo.update_player(bo, &UpdatePlayer { name: Some("".into()), number: None }).await,
        Err(CoreError::Validation(_))
    );

    let players = repo.list_players().await.unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0], updated);
    assert_eq!(players[1].name, "Bo");

    assert!(repo.delete_player(bo).await.unwrap());
    assert!(!repo.delete_player(bo).await.unwrap());
}

pub async fn create_tag_round_trip(repo: &dyn Repository) {
    let goal = category(repo, "Goal").await;
    let ann = player(repo, "Ann", 7).await;
    let bo = player(repo, "Bo", 12).await;

    let first = repo
        .create_tag(&CreateTag {
            player_ids: PlayerIds::Delimited(format!("{ann}, {bo}")),
            video_url: Some("https://example.com/match.mp4".into()),
            ..draft(42, goal, " counter attack ")
        })
        .await
        .unwrap();
    assert_eq!(first.timestamp, 42);
    assert_eq!(first.category_id, goal);
    assert_eq!(first.description, "counter attack");
    assert_eq!(first.player_ids, vec![ann, bo]);
    assert_eq!(first.video_url.as_deref(), Some("https://example.com/match.mp4"));

    let second = repo.create_tag(&draft(42, goal, "again")).await.unwrap();
    assert_ne!(first.id, second.id);
    assert!(second.player_ids.is_empty());
    assert!(second.created_at >= first.created_at);

    assert_eq!(repo.get_tag(first.id).await.unwrap(), first);
}

pub async fn tags_sorted_by_timestamp(repo: &dyn Repository) {
    let goal = category(repo, "Goal").await;
    let mut ids = Vec::new();
    for (timestamp, description) in [(300, "c"), (10, "a"), (120, "b1"), (120, "b2"), (0, "z")] {
        ids.push(repo.create_tag(&draft(timestamp, goal, description)).await.unwrap().id);
    }

    let descriptions = |tags: Vec<crate::tag::Tag>| -> Vec<String> {
        tags.into_iter().map(|t| t.description).collect()
    };
    assert_eq!(
        descriptions(repo.list_tags().await.unwrap()),
        vec!["z", "a", "b1", "b2", "c"]
    );

    // Moving a tag re-sorts it; ties still follow insertion order.
    repo.update_tag(
        ids[0],
        &UpdateTag {
            timestamp: Some(120),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        descriptions(repo.list_tags().await.unwrap()),
        vec!["z", "a", "c", "b1", "b2"]
    );
}

pub async fn unknown_category_persists_nothing(repo: &dyn Repository) {
    let ghost = new_id();
    assert_matches!(
        repo.create_tag(&draft(5, ghost, "orphan")).await,
        Err(CoreError::NotFound { entity: "Category", id }) if id == ghost
    );
    assert!(repo.list_tags().await.unwrap().is_empty());
}

pub async fn invalid_tag_rejected(repo: &dyn Repository) {
    let goal = category(repo, "Goal").await;

    assert_matches!(
        repo.create_tag(&draft(-1, goal, "negative")).await,
        Err(CoreError::Validation(_))
    );
    assert_matches!(
        repo.create_tag(&draft(1, goal, "   ")).await,
        Err(CoreError::Validation(_))
    );
    assert_matches!(
        repo.create_tag(&CreateTag {
            timestamp: None,
            ..draft(0, goal, "no time")
        })
        .await,
        Err(CoreError::Validation(_))
    );
    assert!(repo.list_tags().await.unwrap().is_empty());
}

pub async fn update_tag_keeps_created_at(repo: &dyn Repository) {
    let goal = category(repo, "Goal").await;
    let penalty = category(repo, "Penalty").await;
    let ann = player(repo, "Ann", 7).await;
    let tag = repo.create_tag(&draft(10, goal, "first")).await.unwrap();

    let updated = repo
        .update_tag(
            tag.id,
            &UpdateTag {
                category_id: Some(penalty),
                player_ids: Some(PlayerIds::from(vec![ann])),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, tag.id);
    assert_eq!(updated.created_at, tag.created_at);
    assert_eq!(updated.description, "first");
    assert_eq!(updated.category_id, penalty);
    assert_eq!(updated.player_ids, vec![ann]);
    assert_eq!(repo.get_tag(tag.id).await.unwrap(), updated);

    assert_matches!(
        repo.update_tag(
            tag.id,
            &UpdateTag {
                description: Some(" ".into()),
                ..Default::default()
            }
        )
        .await,
        Err(CoreError::Validation(_))
    );
    assert_matches!(
        repo.update_tag(
            tag.id,
            &UpdateTag {
                category_id: Some(new_id()),
                ..Default::default()
            }
        )
        .await,
        Err(CoreError::NotFound { entity: "Category", .. })
    );
    assert_eq!(repo.get_tag(tag.id).await.unwrap(), updated);
}

pub async fn delete_referenced_category(repo: &dyn Repository) {
    let goal = category(repo, "Goal").await;
    let ann = player(repo, "Ann", 7).await;
    let tag = repo
        .create_tag(&CreateTag {
            player_ids: PlayerIds::from(vec![ann]),
            ..draft(30, goal, "orphaned soon")
        })
        .await
        .unwrap();

    assert!(repo.delete_category(goal).await.unwrap());
    assert!(repo.delete_player(ann).await.unwrap());

    let stored = repo.get_tag(tag.id).await.unwrap();
    assert_eq!(stored.category_id, goal);
    assert_eq!(stored.player_ids, vec![ann]);

    let index = build_category_index(&repo.list_categories().await.unwrap());
    assert_eq!(resolve_category_name(stored.category_id, &index), goal.to_string());

    // The dangling tag is still editable.
    repo.update_tag(
        tag.id,
        &UpdateTag {
            description: Some("still here".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
}

pub async fn missing_ids(repo: &dyn Repository) {
    let ghost = new_id();
    assert_matches!(
        repo.update_category(ghost, &UpdateCategory::default()).await,
        Err(CoreError::NotFound { entity: "Category", .. })
    );
    assert_matches!(
        repo.update_player(ghost, &UpdatePlayer::default()).await,
        Err(CoreError::NotFound { entity: "Player", .. })
    );
    assert_matches!(
        repo.update_tag(ghost, &UpdateTag::default()).await,
        Err(CoreError::NotFound { entity: "Tag", .. })
    );
    assert_matches!(
        repo.get_tag(ghost).await,
        Err(CoreError::NotFound { entity: "Tag", .. })
    );
    assert!(!repo.delete_category(ghost).await.unwrap());
    assert!(!repo.delete_player(ghost).await.unwrap());
    assert!(!repo.delete_tag(ghost).await.unwrap());
}

pub async fn export_example(repo: &dyn Repository) {
    let goal = category(repo, "Goal").await;
    let ann = player(repo, "Ann", 7).await;
    let tag = repo
        .create_tag(&CreateTag {
            player_ids: PlayerIds::from(vec![ann]),
            ..draft(125, goal, "nice")
        })
        .await
        .unwrap();
    repo.create_tag(&draft(3, goal, "kickoff")).await.unwrap();

    let rows = build_export_rows(repo).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "kickoff");

    let row = &rows[1];
    assert_eq!(row.timestamp, 125);
    assert_eq!(row.formatted_time, "2:05");
    assert_eq!(row.category, "Goal");
    assert_eq!(row.description, "nice");
    assert_eq!(row.players, "Ann (#7)");
    assert_eq!(row.video_url, "");
    assert_eq!(
        row.created_at,
        tag.created_at
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    );
}
