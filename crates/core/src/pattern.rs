//! Tag frequency and player involvement counts.

use std::collections::HashMap;

use serde::Serialize;

use crate::category::Category;
use crate::error::CoreResult;
use crate::player::Player;
use crate::repository::Repository;
use crate::tag::Tag;
use crate::types::{EntityId, VideoSeconds};

/// Category name counted as a goal in player summaries.
pub const GOAL_CATEGORY: &str = "Goal";

/// Category name counted as a turnover in player summaries.
pub const TURNOVER_CATEGORY: &str = "Turnover";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category_id: EntityId,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInvolvement {
    pub player_id: EntityId,
    pub label: String,
    pub total_tags: usize,
    pub goals: usize,
    pub turnovers: usize,
    /// Ascending.
    pub timestamps: Vec<VideoSeconds>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub total_tags: usize,
    pub categories: Vec<CategoryCount>,
    pub players: Vec<PlayerInvolvement>,
}

/// Count tags per category and per involved player.
///
/// Categories appear in listed order, including those with zero tags.
/// Players without tags are omitted; the rest are ordered by tag count,
/// most involved first, ties in listed order.
pub fn summarize_patterns(tags: &[Tag], categories: &[Category], players: &[Player]) -> PatternSummary {
    let mut per_category: HashMap<EntityId, usize> = HashMap::new();
    for tag in tags {
        *per_category.entry(tag.category_id).or_default() += 1;
    }

    let category_counts = categories
        .iter()
        .map(|c| CategoryCount {
            category_id: c.id,
            name: c.name.clone(),
            count: per_category.get(&c.id).copied().unwrap_or(0),
        })
        .collect();

    let names: HashMap<EntityId, &str> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();
    let is_named = |tag: &Tag, wanted: &str| names.get(&tag.category_id) == Some(&wanted);

    let mut involvement: Vec<PlayerInvolvement> = players
        .iter()
        .filter_map(|player| {
            let involved: Vec<&Tag> = tags
                .iter()
                .filter(|t| t.player_ids.contains(&player.id))
                .collect();
            if involved.is_empty() {
                return None;
            }
            let mut timestamps: Vec<_> = involved.iter().map(|t| t.timestamp).collect();
            timestamps.sort_unstable();
            Some(PlayerInvolvement {
                player_id: player.id,
                label: player.label(),
                total_tags: involved.len(),
                goals: involved.iter().filter(|&&t| is_named(t, GOAL_CATEGORY)).count(),
                turnovers: involved.iter().filter(|&&t| is_named(t, TURNOVER_CATEGORY)).count(),
                timestamps,
            })
        })
        .collect();
    involvement.sort_by(|a, b| b.total_tags.cmp(&a.total_tags));

    PatternSummary {
        total_tags: tags.len(),
        categories: category_counts,
        players: involvement,
    }
}

/// Fetch snapshots from `repo` and summarize them.
pub async fn build_pattern_summary(repo: &dyn Repository) -> CoreResult<PatternSummary> {
    let (tags, categories, players) = tokio::try_join!(
        repo.list_tags(),
        repo.list_categories(),
        repo.list_players(),
    )?;
    Ok(summarize_patterns(&tags, &categories, &players))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::new_id;

    fn category(name: &str) -> Category {
        Category {
            id: new_id(),
            name: name.into(),
        }
    }

    fn player(name: &str, number: i32) -> Player {
        Player {
            id: new_id(),
            name: name.into(),
            number,
        }
    }

    fn tag(timestamp: VideoSeconds, category: &Category, players: &[&Player]) -> Tag {
        Tag {
            id: new_id(),
            timestamp,
            category_id: category.id,
            description: "x".into(),
            player_ids: players.iter().map(|p| p.id).collect(),
            video_url: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn counts_per_category_include_zero() {
        let goal = category("Goal");
        let penalty = category("Penalty");
        let tags = vec![tag(1, &goal, &[]), tag(2, &goal, &[])];

        let summary = summarize_patterns(&tags, &[goal.clone(), penalty.clone()], &[]);
        assert_eq!(summary.total_tags, 2);
        assert_eq!(summary.categories[0].count, 2);
        assert_eq!(summary.categories[1].name, "Penalty");
        assert_eq!(summary.categories[1].count, 0);
    }

    #[test]
    fn player_involvement_counts_goals_and_turnovers() {
        let goal = category("Goal");
        let turnover = category("Turnover");
        let ann = player("Ann", 7);
        let bo = player("Bo", 12);
        let idle = player("Cy", 3);
        let tags = vec![
            tag(90, &goal, &[&ann]),
            tag(30, &turnover, &[&ann, &bo]),
            tag(60, &goal, &[&ann]),
        ];

        let summary = summarize_patterns(
            &tags,
            &[goal, turnover],
            &[bo.clone(), ann.clone(), idle],
        );

        assert_eq!(summary.players.len(), 2);
        let top = &summary.players[0];
        assert_eq!(top.label, "Ann (#7)");
        assert_eq!(top.total_tags, 3);
        assert_eq!(top.goals, 2);
        assert_eq!(top.turnovers, 1);
        assert_eq!(top.timestamps, vec![30, 60, 90]);
        assert_eq!(summary.players[1].player_id, bo.id);
    }

    #[test]
    fn dangling_category_is_not_counted_under_a_name() {
        let goal = category("Goal");
        let ann = player("Ann", 7);
        let orphan = tag(5, &category("Deleted"), &[&ann]);

        let summary = summarize_patterns(&[orphan], &[goal], &[ann]);
        assert_eq!(summary.categories[0].count, 0);
        assert_eq!(summary.players[0].goals, 0);
        assert_eq!(summary.players[0].total_tags, 1);
    }
}
