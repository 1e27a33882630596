//! Daily streak advancement.
//!
//! A streak counts consecutive calendar days with at least one logged
//! action. Only the stored snapshot and the day of the new action matter.

use chrono::NaiveDate;

/// Stored streak state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSnapshot {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Streak value after logging an action on `action_day`.
///
/// Returns `None` when the day already counted (another action on the same
/// day leaves the streak untouched). A day directly after the last action
/// extends the streak; any gap resets it to 1.
pub fn next_streak(
    last_action_day: Option<NaiveDate>,
    current_streak: u32,
    action_day: NaiveDate,
) -> Option<u32> {
    match last_action_day {
        Some(last) if last == action_day => None,
        Some(last) if last.succ_opt() == Some(action_day) => Some(current_streak + 1),
        _ => Some(1),
    }
}
