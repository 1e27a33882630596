//! Terminal output helpers for verdantctl.
//!
//! Plain ASCII rendering; color is applied by the commands.

use verdant_common::DailyTotal;

pub const THIN_SEP: &str = "------------------------------------------------------------";

const BAR_WIDTH: usize = 40;

/// Render the last-7-days chart as horizontal ASCII bars, oldest first.
pub fn render_week_chart(days: &[DailyTotal]) -> String {
    let max = days.iter().map(|d| d.points).max().unwrap_or(0);

    let mut lines = Vec::new();
    for day in days {
        let filled = if max > 0 {
            ((day.points as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "  {}  {:<width$}  {}",
            day.day,
            "#".repeat(filled),
            day.points,
            width = BAR_WIDTH
        ));
    }
    lines.join("\n")
}

/// Render a progress bar like "[########------------] 430/1000".
pub fn progress_bar(current: i64, target: i64, width: usize) -> String {
    let ratio = if target > 0 {
        (current as f64 / target as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(width - filled),
        current,
        target
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_chart_one_line_per_day() {
        let days: Vec<DailyTotal> = (1..=7)
            .map(|d| DailyTotal {
                day: day(d),
                points: (d as i64) * 10,
            })
            .collect();
        let chart = render_week_chart(&days);
        assert_eq!(chart.lines().count(), 7);
        assert!(chart.contains("2026-08-01"));
        assert!(chart.contains("70"));
    }

    #[test]
    fn test_chart_tallest_bar_fills_width() {
        let days = vec![
            DailyTotal { day: day(1), points: 5 },
            DailyTotal { day: day(2), points: 100 },
        ];
        let chart = render_week_chart(&days);
        let tallest = chart.lines().nth(1).unwrap();
        assert!(tallest.contains(&"#".repeat(40)));
    }

    #[test]
    fn test_chart_handles_empty_week() {
        let days: Vec<DailyTotal> = (1..=7)
            .map(|d| DailyTotal { day: day(d), points: 0 })
            .collect();
        let chart = render_week_chart(&days);
        assert_eq!(chart.lines().count(), 7);
        assert!(!chart.contains('#'));
    }

    #[test]
    fn test_progress_bar_partial_and_full() {
        let bar = progress_bar(5, 10, 10);
        assert_eq!(bar, "[#####-----] 5/10");

        let bar = progress_bar(10, 10, 10);
        assert_eq!(bar, "[##########] 10/10");
    }

    #[test]
    fn test_progress_bar_clamps_overflow() {
        let bar = progress_bar(1500, 1000, 10);
        assert_eq!(bar, "[##########] 1500/1000");
    }
}
