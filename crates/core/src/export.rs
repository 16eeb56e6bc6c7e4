//! Flat, denormalized export of the full tag set.
//!
//! Rows are emitted in the order the store lists tags (ascending
//! timestamp) and are never re-sorted here.

use chrono::{NaiveDate, SecondsFormat};
use serde::Serialize;

use crate::category::Category;
use crate::error::CoreResult;
use crate::lookup::JoinIndex;
use crate::player::Player;
use crate::repository::Repository;
use crate::tag::Tag;
use crate::types::VideoSeconds;

/// CSV header, one column per [`ExportRow`] field, in field order.
pub const CSV_HEADERS: [&str; 7] = [
    "Timestamp (seconds)",
    "Formatted Time",
    "Category",
    "Description",
    "Players",
    "Video URL",
    "Created At",
];

/// Separator between resolved player labels in the `players` column.
const PLAYER_LABEL_SEPARATOR: &str = ", ";

/// One display-ready tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub timestamp: VideoSeconds,
    pub formatted_time: String,
    pub category: String,
    pub description: String,
    pub players: String,
    pub video_url: String,
    pub created_at: String,
}

/// `M:SS` with minutes unbounded, e.g. `125` -> `"2:05"`, `3600` -> `"60:00"`.
pub fn format_time(seconds: VideoSeconds) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Map one tag through the join index.
pub fn export_row(tag: &Tag, index: &JoinIndex) -> ExportRow {
    ExportRow {
        timestamp: tag.timestamp,
        formatted_time: format_time(tag.timestamp),
        category: index.category_name(tag.category_id),
        description: tag.description.clone(),
        players: index.player_labels(&tag.player_ids).join(PLAYER_LABEL_SEPARATOR),
        video_url: tag.video_url.clone().unwrap_or_default(),
        created_at: tag.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Build rows from snapshots, preserving the order of `tags`.
pub fn export_rows(tags: &[Tag], categories: &[Category], players: &[Player]) -> Vec<ExportRow> {
    let index = JoinIndex::new(categories, players);
    tags.iter().map(|tag| export_row(tag, &index)).collect()
}

/// Fetch everything once from `repo` and build the export rows.
///
/// The three listings are independent reads and run concurrently.
pub async fn build_export_rows(repo: &dyn Repository) -> CoreResult<Vec<ExportRow>> {
    let (tags, categories, players) = tokio::try_join!(
        repo.list_tags(),
        repo.list_categories(),
        repo.list_players(),
    )?;
    Ok(export_rows(&tags, &categories, &players))
}

/// Quote a CSV field, doubling embedded quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serialize rows to CSV: header line, then one line per row.
///
/// `timestamp` is written bare; every string field is quoted.
pub fn to_csv(rows: &[ExportRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for row in rows {
        let fields = [
            row.timestamp.to_string(),
            quote(&row.formatted_time),
            quote(&row.category),
            quote(&row.description),
            quote(&row.players),
            quote(&row.video_url),
            quote(&row.created_at),
        ];
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// Fetch, join and serialize in one call.
pub async fn export_csv(repo: &dyn Repository) -> CoreResult<String> {
    Ok(to_csv(&build_export_rows(repo).await?))
}

/// Download filename for an export taken on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("video-tags-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::types::new_id;

    fn sample() -> (Vec<Category>, Vec<Player>, Tag) {
        let goal = Category {
            id: new_id(),
            name: "Goal".into(),
        };
        let ann = Player {
            id: new_id(),
            name: "Ann".into(),
            number: 7,
        };
        let tag = Tag {
            id: new_id(),
            timestamp: 125,
            category_id: goal.id,
            description: "nice".into(),
            player_ids: vec![ann.id],
            video_url: None,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };
        (vec![goal], vec![ann], tag)
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(5), "0:05");
        assert_eq!(format_time(125), "2:05");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn example_row() {
        let (categories, players, tag) = sample();
        let rows = export_rows(&[tag], &categories, &players);
        assert_eq!(
            rows,
            vec![ExportRow {
                timestamp: 125,
                formatted_time: "2:05".into(),
                category: "Goal".into(),
                description: "nice".into(),
                players: "Ann (#7)".into(),
                video_url: String::new(),
                created_at: "2024-03-01T12:00:00.000Z".into(),
            }]
        );
    }

    #[test]
    fn dangling_references_fall_back() {
        let (_, players, tag) = sample();
        let ghost = new_id();
        let tag = Tag {
            player_ids: vec![ghost, players[0].id],
            ..tag
        };
        let row = export_row(&tag, &JoinIndex::new(&[], &players));
        assert_eq!(row.category, tag.category_id.to_string());
        assert_eq!(row.players, "Ann (#7)");
    }

    #[test]
    fn multiple_players_joined_with_comma_space() {
        let (categories, mut players, tag) = sample();
        let bo = Player {
            id: new_id(),
            name: "Bo".into(),
            number: 12,
        };
        players.push(bo.clone());
        let tag = Tag {
            player_ids: vec![bo.id, players[0].id],
            ..tag
        };
        let rows = export_rows(&[tag], &categories, &players);
        assert_eq!(rows[0].players, "Bo (#12), Ann (#7)");
    }

    #[test]
    fn rows_keep_source_order() {
        let (categories, players, tag) = sample();
        let later = Tag {
            id: new_id(),
            timestamp: 10,
            ..tag.clone()
        };
        // Deliberately out of timestamp order: export must not re-sort.
        let rows = export_rows(&[tag, later], &categories, &players);
        let stamps: Vec<_> = rows.iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps, vec![125, 10]);
    }

    #[test]
    fn csv_header_and_row() {
        let (categories, players, tag) = sample();
        let csv = to_csv(&export_rows(&[tag], &categories, &players));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Timestamp (seconds),Formatted Time,Category,Description,Players,Video URL,Created At"
        );
        assert_eq!(
            lines[1],
            r#"125,"2:05","Goal","nice","Ann (#7)","","2024-03-01T12:00:00.000Z""#
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn csv_doubles_embedded_quotes_only_in_that_field() {
        let (categories, players, tag) = sample();
        let tag = Tag {
            description: r#"He said "go""#.into(),
            ..tag
        };
        let csv = to_csv(&export_rows(&[tag], &categories, &players));
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            r#"125,"2:05","Goal","He said ""go""","Ann (#7)","","2024-03-01T12:00:00.000Z""#
        );
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADERS.join(","));
    }

    #[test]
    fn filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(export_filename(date), "video-tags-2024-03-01.csv");
    }
}
