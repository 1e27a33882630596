//! In-process API tests driving the router with tower's oneshot.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use verdant_common::ActionStore;
use verdantd::server::{app, AppState};

fn test_app() -> Router {
    let store = ActionStore::open_in_memory().expect("in-memory store");
    app(Arc::new(AppState::new(store)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let app = test_app();
    let response = app.oneshot(get("/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["entries_recorded"], 0);
}

#[tokio::test]
async fn test_log_action_awards_tabulated_points() {
    let app = test_app();
    let response = app
        .oneshot(post_json("/v1/actions", json!({"category": "Bike"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["points_awarded"], 20);
    assert_eq!(body["total_points"], 20);
    assert_eq!(body["weekly_points"], 20);
    assert_eq!(body["weekly_cap"], 1000);
    assert_eq!(body["cap_reached"], false);
    assert_eq!(body["current_streak"], 1);
}

#[tokio::test]
async fn test_unknown_category_rejected_store_unchanged() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/v1/actions", json!({"category": "Teleport"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/v1/actions")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_case_insensitive_category_accepted() {
    let app = test_app();
    let response = app
        .oneshot(post_json("/v1/actions", json!({"category": "plant-seed"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["category"], "Plant Seed");
    assert_eq!(body["points_awarded"], 30);
}

#[tokio::test]
async fn test_weekly_points_capped_at_thousand() {
    let app = test_app();

    // 34 x 30 = 1020 raw points, all inside the current week.
    for _ in 0..34 {
        let response = app
            .clone()
            .oneshot(post_json("/v1/actions", json!({"category": "Plant Seed"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/v1/stats")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["weekly_points"], 1000);
    assert_eq!(body["total_points"], 1020);
}

#[tokio::test]
async fn test_logging_past_cap_is_not_blocked() {
    let app = test_app();

    for _ in 0..34 {
        app.clone()
            .oneshot(post_json("/v1/actions", json!({"category": "Plant Seed"})))
            .await
            .unwrap();
    }

    // Cap reached; the next entry is still recorded.
    let response = app
        .clone()
        .oneshot(post_json("/v1/actions", json!({"category": "Recycle"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["cap_reached"], true);
    assert_eq!(body["weekly_points"], 1000);
    assert_eq!(body["total_points"], 1030);
}

#[tokio::test]
async fn test_badges_unlock_with_cumulative_points() {
    let app = test_app();

    // 5 x 30 = 150 points: badges 50 and 100, not 200.
    for _ in 0..5 {
        app.clone()
            .oneshot(post_json("/v1/actions", json!({"category": "Plant Seed"})))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/v1/achievements")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["unlocked_count"], 2);

    let badges = body["badges"].as_array().unwrap();
    let unlocked: Vec<i64> = badges
        .iter()
        .filter(|b| b["unlocked"] == true)
        .map(|b| b["threshold"].as_i64().unwrap())
        .collect();
    assert_eq!(unlocked, vec![50, 100]);
}

#[tokio::test]
async fn test_log_response_reports_new_badges() {
    let app = test_app();

    app.clone()
        .oneshot(post_json("/v1/actions", json!({"category": "Plant Seed"})))
        .await
        .unwrap();

    // 30 -> 60 crosses the 50 milestone.
    let response = app
        .oneshot(post_json("/v1/actions", json!({"category": "Plant Seed"})))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["new_badges"], json!([50]));
}

#[tokio::test]
async fn test_chart_week_has_seven_days() {
    let app = test_app();

    app.clone()
        .oneshot(post_json("/v1/actions", json!({"category": "Walk"})))
        .await
        .unwrap();

    let response = app.oneshot(get("/v1/chart/week")).await.unwrap();
    let body = body_json(response).await;
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    // Today is the last entry and carries the walk.
    assert_eq!(days[6]["points"], 15);
}

#[tokio::test]
async fn test_history_limit_applies() {
    let app = test_app();

    for category in ["Recycle", "Bike", "Walk"] {
        app.clone()
            .oneshot(post_json("/v1/actions", json!({"category": category})))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/v1/actions?limit=2")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_count"], 3);
}

#[tokio::test]
async fn test_challenges_listed_and_progressing() {
    let app = test_app();

    app.clone()
        .oneshot(post_json("/v1/actions", json!({"category": "Bike"})))
        .await
        .unwrap();

    let response = app.oneshot(get("/v1/challenges")).await.unwrap();
    let body = body_json(response).await;
    let challenges = body["challenges"].as_array().unwrap();
    assert_eq!(challenges.len(), 6);

    let transport = challenges
        .iter()
        .find(|c| c["name"] == "Transport Hero")
        .unwrap();
    assert_eq!(transport["current_count"], 1);
}

#[tokio::test]
async fn test_reset_wipes_store() {
    let app = test_app();

    for _ in 0..3 {
        app.clone()
            .oneshot(post_json("/v1/actions", json!({"category": "Recycle"})))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(post_json("/v1/reset", json!(null)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["entries_removed"], 3);

    let response = app.oneshot(get("/v1/stats")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total_points"], 0);
    assert_eq!(body["total_actions"], 0);
}
