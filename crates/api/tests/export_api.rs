//! HTTP-level tests for export and pattern summary endpoints.

mod common;

use std::sync::Arc;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json};
use matchtag_core::memory::MemoryRepository;
use serde_json::json;

async fn tag(repo: &Arc<MemoryRepository>, body: serde_json::Value) {
    let response = post_json(common::app_for(repo), "/api/v1/tags", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn export_json_resolves_names() {
    let (_app, repo) = common::build_test_app();
    let goal = common::create_category(&repo, "Goal").await;
    let ann = common::create_player(&repo, "Ann", 7).await;
    let bo = common::create_player(&repo, "Bo", 9).await;

    tag(
        &repo,
        json!({
            "timestamp": 125,
            "categoryId": goal,
            "description": "Header",
            "playerIds": [ann, uuid::Uuid::new_v4(), bo],
            "videoUrl": "https://video.test/match",
        }),
    )
    .await;

    let response = get(common::app_for(&repo), "/api/v1/export").await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = body_json(response).await;
    let row = &rows["data"][0];
    assert_eq!(row["timestamp"], 125);
    assert_eq!(row["formattedTime"], "2:05");
    assert_eq!(row["category"], "Goal");
    assert_eq!(row["description"], "Header");
    assert_eq!(row["players"], "Ann (#7), Bo (#9)");
    assert_eq!(row["videoUrl"], "https://video.test/match");
    assert!(row["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn export_falls_back_to_raw_category_id() {
    let (_app, repo) = common::build_test_app();
    let goal = common::create_category(&repo, "Goal").await;
    tag(
        &repo,
        json!({ "timestamp": 3600, "categoryId": goal, "description": "Late" }),
    )
    .await;
    let response = common::delete(
        common::app_for(&repo),
        &format!("/api/v1/categories/{goal}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let rows = body_json(get(common::app_for(&repo), "/api/v1/export").await).await;
    assert_eq!(rows["data"][0]["category"], goal.as_str());
    assert_eq!(rows["data"][0]["formattedTime"], "60:00");
    assert_eq!(rows["data"][0]["players"], "");
    assert_eq!(rows["data"][0]["videoUrl"], "");
}

#[tokio::test]
async fn csv_download_has_headers_and_quoting() {
    let (_app, repo) = common::build_test_app();
    let goal = common::create_category(&repo, "Goal").await;
    tag(
        &repo,
        json!({ "timestamp": 5, "categoryId": goal, "description": "He said \"go\"" }),
    )
    .await;

    let response = get(common::app_for(&repo), "/api/v1/export/csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let disposition = response.headers()[CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"video-tags-"));
    assert!(disposition.ends_with(".csv\""));

    let csv = body_text(response).await;
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Timestamp (seconds),Formatted Time,Category,Description,Players,Video URL,Created At"
    );
    assert!(lines[1].starts_with("5,\"0:05\",\"Goal\",\"He said \"\"go\"\"\",\"\",\"\",\""));
    assert!(!csv.ends_with('\n'));
}

#[tokio::test]
async fn csv_of_empty_store_is_header_only() {
    let (app, _repo) = common::build_test_app();
    let csv = body_text(get(app, "/api/v1/export/csv").await).await;
    assert_eq!(
        csv,
        "Timestamp (seconds),Formatted Time,Category,Description,Players,Video URL,Created At"
    );
}

#[tokio::test]
async fn analysis_counts_categories_and_players() {
    let (_app, repo) = common::build_test_app();
    let goal = common::create_category(&repo, "Goal").await;
    let turnover = common::create_category(&repo, "Turnover").await;
    let penalty = common::create_category(&repo, "Penalty").await;
    let ann = common::create_player(&repo, "Ann", 7).await;
    let bo = common::create_player(&repo, "Bo", 9).await;

    tag(&repo, json!({ "timestamp": 40, "categoryId": goal, "description": "a", "playerIds": [bo] })).await;
    tag(&repo, json!({ "timestamp": 10, "categoryId": turnover, "description": "b", "playerIds": [bo, ann] })).await;
    tag(&repo, json!({ "timestamp": 20, "categoryId": goal, "description": "c", "playerIds": [bo] })).await;

    let response = get(common::app_for(&repo), "/api/v1/analysis").await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = &body_json(response).await["data"];

    assert_eq!(summary["totalTags"], 3);
    assert_eq!(
        summary["categories"],
        json!([
            { "categoryId": goal, "name": "Goal", "count": 2 },
            { "categoryId": turnover, "name": "Turnover", "count": 1 },
            { "categoryId": penalty, "name": "Penalty", "count": 0 },
        ])
    );

    let players = summary["players"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["label"], "Bo (#9)");
    assert_eq!(players[0]["totalTags"], 3);
    assert_eq!(players[0]["goals"], 2);
    assert_eq!(players[0]["turnovers"], 1);
    assert_eq!(players[0]["timestamps"], json!([10, 20, 40]));
    assert_eq!(players[1]["label"], "Ann (#7)");
    assert_eq!(players[1]["totalTags"], 1);
}
