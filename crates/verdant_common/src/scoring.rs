//! Weekly scoring rules.
//!
//! The weekly cap bounds what the trailing 7-day total may display; it
//! never blocks recording. Raw sums stay in the store untouched.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Maximum eco-points counted toward the weekly display total.
pub const WEEKLY_CAP: i64 = 1000;

/// Days covered by the weekly window and the chart.
pub const WEEK_DAYS: usize = 7;

/// Cap a raw weekly sum for display.
pub fn apply_weekly_cap(raw_sum: i64) -> i64 {
    raw_sum.min(WEEKLY_CAP)
}

/// True once the raw weekly sum has reached the cap.
pub fn cap_reached(raw_sum: i64) -> bool {
    raw_sum >= WEEKLY_CAP
}

/// Points still counted toward the weekly total.
pub fn cap_remaining(raw_sum: i64) -> i64 {
    (WEEKLY_CAP - raw_sum).max(0)
}

/// Points logged on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub points: i64,
}

/// Zero-fill a sparse day-to-points mapping into exactly [`WEEK_DAYS`]
/// entries ending at `today`, oldest first.
pub fn fill_week(today: NaiveDate, sparse: &[(NaiveDate, i64)]) -> Vec<DailyTotal> {
    (0..WEEK_DAYS as i64)
        .map(|offset| {
            let day = today - Duration::days(WEEK_DAYS as i64 - 1 - offset);
            let points = sparse
                .iter()
                .find(|(d, _)| *d == day)
                .map(|(_, p)| *p)
                .unwrap_or(0);
            DailyTotal { day, points }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_cap_never_exceeded() {
        assert_eq!(apply_weekly_cap(0), 0);
        assert_eq!(apply_weekly_cap(999), 999);
        assert_eq!(apply_weekly_cap(1000), 1000);
        assert_eq!(apply_weekly_cap(1020), 1000);
        assert_eq!(apply_weekly_cap(50_000), 1000);
    }

    #[test]
    fn test_cap_reached_and_remaining() {
        assert!(!cap_reached(999));
        assert!(cap_reached(1000));
        assert!(cap_reached(1500));
        assert_eq!(cap_remaining(900), 100);
        assert_eq!(cap_remaining(1200), 0);
    }

    #[test]
    fn test_fill_week_always_seven_days() {
        let filled = fill_week(day(7), &[]);
        assert_eq!(filled.len(), WEEK_DAYS);
        assert_eq!(filled[0].day, day(1));
        assert_eq!(filled[6].day, day(7));
        assert!(filled.iter().all(|d| d.points == 0));
    }

    #[test]
    fn test_fill_week_places_points_on_their_day() {
        let filled = fill_week(day(7), &[(day(3), 45), (day(7), 10)]);
        assert_eq!(filled[2], DailyTotal { day: day(3), points: 45 });
        assert_eq!(filled[6], DailyTotal { day: day(7), points: 10 });
        assert_eq!(filled.iter().map(|d| d.points).sum::<i64>(), 55);
    }

    #[test]
    fn test_fill_week_ignores_days_outside_window() {
        let filled = fill_week(day(10), &[(day(1), 500)]);
        assert!(filled.iter().all(|d| d.points == 0));
    }
}
