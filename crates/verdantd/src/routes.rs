//! API routes for verdantd

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use verdant_common::api::{
    AchievementsResponse, ChallengesResponse, HealthResponse, HistoryResponse, LogActionRequest,
    LogActionResponse, ResetResponse, StatsResponse, WeekChartResponse,
};
use verdant_common::{achievements, scoring, Category, TrackerError};

type AppStateArc = Arc<AppState>;

fn store_error(err: TrackerError) -> (StatusCode, String) {
    error!("  Store failure: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

// ============================================================================
// Action Routes
// ============================================================================

pub fn action_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/actions", post(log_action).get(list_actions))
        .route("/v1/reset", post(reset))
}

async fn log_action(
    State(state): State<AppStateArc>,
    Json(req): Json<LogActionRequest>,
) -> Result<Json<LogActionResponse>, (StatusCode, String)> {
    // Validate before touching the store; an unknown category writes nothing.
    let category: Category = req.category.parse().map_err(|e: TrackerError| {
        info!("  Rejected log request: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let old_total = state.store.total_points().map_err(store_error)?;

    let now = Utc::now();
    let entry = state
        .store
        .record_action(category, now)
        .map_err(store_error)?;

    let total_points = state.store.total_points().map_err(store_error)?;
    let weekly_raw = state.store.weekly_points_raw(now).map_err(store_error)?;
    let streak = state.store.streak().map_err(store_error)?;
    let new_badges = achievements::newly_unlocked(old_total, total_points);

    info!(
        "  Logged {} (+{} pts, weekly {}/{})",
        category,
        entry.points,
        scoring::apply_weekly_cap(weekly_raw),
        scoring::WEEKLY_CAP
    );

    Ok(Json(LogActionResponse {
        category: category.label().to_string(),
        points_awarded: entry.points,
        total_points,
        weekly_points: scoring::apply_weekly_cap(weekly_raw),
        weekly_cap: scoring::WEEKLY_CAP,
        cap_reached: scoring::cap_reached(weekly_raw),
        current_streak: streak.current_streak,
        new_badges,
    }))
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    limit: Option<usize>,
}

async fn list_actions(
    State(state): State<AppStateArc>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, (StatusCode, String)> {
    let entries = state.store.history(params.limit).map_err(store_error)?;
    let total_count = state.store.action_count().map_err(store_error)?;
    Ok(Json(HistoryResponse {
        entries,
        total_count,
    }))
}

async fn reset(
    State(state): State<AppStateArc>,
) -> Result<Json<ResetResponse>, (StatusCode, String)> {
    let entries_removed = state.store.action_count().map_err(store_error)?;
    state.store.reset_all().map_err(store_error)?;
    info!("  Reset complete ({} entries removed)", entries_removed);
    Ok(Json(ResetResponse {
        status: "ok".to_string(),
        entries_removed,
    }))
}

// ============================================================================
// Stats Routes
// ============================================================================

pub fn stats_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/stats", get(get_stats))
        .route("/v1/chart/week", get(week_chart))
        .route("/v1/achievements", get(get_achievements))
        .route("/v1/challenges", get(get_challenges))
}

async fn get_stats(
    State(state): State<AppStateArc>,
) -> Result<Json<StatsResponse>, (StatusCode, String)> {
    let now = Utc::now();
    let total_points = state.store.total_points().map_err(store_error)?;
    let weekly_raw = state.store.weekly_points_raw(now).map_err(store_error)?;
    let total_actions = state.store.action_count().map_err(store_error)?;
    let streak = state.store.streak().map_err(store_error)?;

    Ok(Json(StatsResponse {
        total_points,
        weekly_points: scoring::apply_weekly_cap(weekly_raw),
        weekly_cap: scoring::WEEKLY_CAP,
        total_actions,
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
    }))
}

async fn week_chart(
    State(state): State<AppStateArc>,
) -> Result<Json<WeekChartResponse>, (StatusCode, String)> {
    let days = state
        .store
        .points_per_day(Utc::now().date_naive())
        .map_err(store_error)?;
    Ok(Json(WeekChartResponse { days }))
}

async fn get_achievements(
    State(state): State<AppStateArc>,
) -> Result<Json<AchievementsResponse>, (StatusCode, String)> {
    let total = state.store.total_points().map_err(store_error)?;
    let badges = achievements::check_badges(total);
    let unlocked_count = badges.iter().filter(|b| b.unlocked).count();
    Ok(Json(AchievementsResponse {
        badges,
        unlocked_count,
    }))
}

async fn get_challenges(
    State(state): State<AppStateArc>,
) -> Result<Json<ChallengesResponse>, (StatusCode, String)> {
    let challenges = state.store.challenges().map_err(store_error)?;
    Ok(Json(ChallengesResponse { challenges }))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(
    State(state): State<AppStateArc>,
) -> Result<Json<HealthResponse>, (StatusCode, String)> {
    let entries_recorded = state.store.action_count().map_err(store_error)?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        entries_recorded,
    }))
}
