//! Verdant Common - shared types and logic for the Verdant eco tracker.
//!
//! Holds the category table, scoring rules, achievement evaluation,
//! streak and challenge logic, the SQLite store, configuration, and the
//! wire types shared by the daemon and the CLI.

pub mod achievements;
pub mod api;
pub mod categories;
pub mod challenges;
pub mod config;
pub mod error;
pub mod scoring;
pub mod store;
pub mod streaks;

pub use achievements::{check_badges, evaluate, newly_unlocked, Badge, Tier, MILESTONES};
pub use api::*;
pub use categories::Category;
pub use challenges::ChallengeProgress;
pub use config::TrackerConfig;
pub use error::TrackerError;
pub use scoring::{apply_weekly_cap, cap_reached, DailyTotal, WEEKLY_CAP};
pub use store::{ActionEntry, ActionStore};
pub use streaks::StreakSnapshot;
