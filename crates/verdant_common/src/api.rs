//! Wire types for the verdantd HTTP API.

use crate::achievements::Badge;
use crate::challenges::ChallengeProgress;
use crate::scoring::DailyTotal;
use crate::store::ActionEntry;
use serde::{Deserialize, Serialize};

/// Request to log an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActionRequest {
    /// Category name, e.g. "Recycle" or "public-transport".
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActionResponse {
    pub category: String,
    pub points_awarded: i64,
    pub total_points: i64,
    /// Weekly total after the cap.
    pub weekly_points: i64,
    pub weekly_cap: i64,
    /// True once raw weekly points have reached the cap.
    pub cap_reached: bool,
    pub current_streak: u32,
    /// Milestone thresholds crossed by this action.
    pub new_badges: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_points: i64,
    pub weekly_points: i64,
    pub weekly_cap: i64,
    pub total_actions: i64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entries: Vec<ActionEntry>,
    pub total_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekChartResponse {
    pub days: Vec<DailyTotal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsResponse {
    pub badges: Vec<Badge>,
    pub unlocked_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengesResponse {
    pub challenges: Vec<ChallengeProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub entries_recorded: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub status: String,
    pub entries_removed: i64,
}
