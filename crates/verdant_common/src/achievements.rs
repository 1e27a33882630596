//! Milestone badges for the eco-points system.
//!
//! A badge unlocks once cumulative points cross its threshold. Evaluation
//! is pure; the store is never consulted here. Badges render as ASCII.

use serde::{Deserialize, Serialize};

/// Cumulative point thresholds, in unlock order.
pub const MILESTONES: [i64; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];

/// Badge tier, by threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn for_threshold(threshold: i64) -> Self {
        if threshold < 400 {
            Tier::Bronze
        } else if threshold < 800 {
            Tier::Silver
        } else {
            Tier::Gold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
        }
    }
}

/// A milestone badge and its unlocked state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub threshold: i64,
    pub tier: Tier,
    pub unlocked: bool,
}

/// Thresholds unlocked at a cumulative total.
pub fn evaluate(cumulative_points: i64) -> Vec<i64> {
    MILESTONES
        .iter()
        .copied()
        .filter(|m| cumulative_points >= *m)
        .collect()
}

/// Every badge with its unlocked state at a cumulative total.
pub fn check_badges(cumulative_points: i64) -> Vec<Badge> {
    MILESTONES
        .iter()
        .map(|&threshold| Badge {
            threshold,
            tier: Tier::for_threshold(threshold),
            unlocked: cumulative_points >= threshold,
        })
        .collect()
}

/// Milestones crossed by a single logging step, for unlock notifications.
pub fn newly_unlocked(old_total: i64, new_total: i64) -> Vec<i64> {
    MILESTONES
        .iter()
        .copied()
        .filter(|&m| old_total < m && new_total >= m)
        .collect()
}

/// ASCII badge symbol, e.g. "[100]".
pub fn badge_symbol(threshold: i64) -> String {
    format!("[{}]", threshold)
}

/// One-line unlock notification.
pub fn format_unlock(threshold: i64) -> String {
    format!(
        "{} Badge unlocked: {} points ({})",
        badge_symbol(threshold),
        threshold,
        Tier::for_threshold(threshold).as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_149_unlocks_two() {
        assert_eq!(evaluate(149), vec![50, 100]);
    }

    #[test]
    fn test_evaluate_200_unlocks_three() {
        assert_eq!(evaluate(200), vec![50, 100, 200]);
    }

    #[test]
    fn test_evaluate_zero_unlocks_nothing() {
        assert!(evaluate(0).is_empty());
        assert!(evaluate(49).is_empty());
    }

    #[test]
    fn test_evaluate_everything_at_cap() {
        assert_eq!(evaluate(1000).len(), MILESTONES.len());
    }

    #[test]
    fn test_newly_unlocked_crossing() {
        assert_eq!(newly_unlocked(40, 110), vec![50, 100]);
        assert_eq!(newly_unlocked(100, 110), Vec::<i64>::new());
        assert_eq!(newly_unlocked(190, 200), vec![200]);
    }

    #[test]
    fn test_tiers_follow_threshold_bands() {
        assert_eq!(Tier::for_threshold(50), Tier::Bronze);
        assert_eq!(Tier::for_threshold(300), Tier::Bronze);
        assert_eq!(Tier::for_threshold(400), Tier::Silver);
        assert_eq!(Tier::for_threshold(700), Tier::Silver);
        assert_eq!(Tier::for_threshold(800), Tier::Gold);
        assert_eq!(Tier::for_threshold(1000), Tier::Gold);
    }

    #[test]
    fn test_check_badges_marks_unlocked() {
        let badges = check_badges(250);
        let unlocked: Vec<i64> = badges
            .iter()
            .filter(|b| b.unlocked)
            .map(|b| b.threshold)
            .collect();
        assert_eq!(unlocked, vec![50, 100, 200]);
        assert_eq!(badges.len(), MILESTONES.len());
    }

    #[test]
    fn test_format_unlock_ascii() {
        let line = format_unlock(100);
        assert!(line.contains("[100]"));
        assert!(line.contains("bronze"));
    }
}
