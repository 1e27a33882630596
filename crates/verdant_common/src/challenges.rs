//! Count-based challenges seeded at first run.
//!
//! Six defaults ship with the store. Progress derives from action counts:
//! total actions for the generic challenges, per-category counts for the
//! recycling and transport ones. Completion latches once reached.

use crate::categories::Category;
use serde::{Deserialize, Serialize};

/// What a challenge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    TotalActions,
    Recycling,
    Transport,
}

/// A seeded challenge definition.
pub struct ChallengeSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub target_count: i64,
    pub kind: ChallengeKind,
}

/// The default challenge table.
pub fn default_challenges() -> [ChallengeSeed; 6] {
    [
        ChallengeSeed {
            name: "Eco Beginner",
            description: "Complete 10 eco-actions",
            target_count: 10,
            kind: ChallengeKind::TotalActions,
        },
        ChallengeSeed {
            name: "Green Warrior",
            description: "Complete 20 eco-actions",
            target_count: 20,
            kind: ChallengeKind::TotalActions,
        },
        ChallengeSeed {
            name: "Eco Champion",
            description: "Complete 50 eco-actions",
            target_count: 50,
            kind: ChallengeKind::TotalActions,
        },
        ChallengeSeed {
            name: "Planet Protector",
            description: "Complete 100 eco-actions",
            target_count: 100,
            kind: ChallengeKind::TotalActions,
        },
        ChallengeSeed {
            name: "Recycling Master",
            description: "Recycle 15 times",
            target_count: 15,
            kind: ChallengeKind::Recycling,
        },
        ChallengeSeed {
            name: "Transport Hero",
            description: "Use eco-transport 25 times",
            target_count: 25,
            kind: ChallengeKind::Transport,
        },
    ]
}

/// Categories that count toward the eco-transport challenge.
pub const TRANSPORT_CATEGORIES: [Category; 3] =
    [Category::Bike, Category::Walk, Category::PublicTransport];

pub fn is_transport(category: Category) -> bool {
    TRANSPORT_CATEGORIES.contains(&category)
}

/// Challenge progress as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeProgress {
    pub name: String,
    pub description: String,
    pub current_count: i64,
    pub target_count: i64,
    pub completed: bool,
}

impl ChallengeProgress {
    /// Progress toward the target, 0-100.
    pub fn percent(&self) -> f64 {
        if self.target_count > 0 {
            (self.current_count as f64 / self.target_count as f64 * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_defaults_with_unique_names() {
        let seeds = default_challenges();
        assert_eq!(seeds.len(), 6);
        let mut names: Vec<&str> = seeds.iter().map(|s| s.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_transport_membership() {
        assert!(is_transport(Category::Bike));
        assert!(is_transport(Category::Walk));
        assert!(is_transport(Category::PublicTransport));
        assert!(!is_transport(Category::Recycle));
        assert!(!is_transport(Category::PlantSeed));
    }

    #[test]
    fn test_percent_clamps_at_hundred() {
        let progress = ChallengeProgress {
            name: "Eco Beginner".to_string(),
            description: String::new(),
            current_count: 14,
            target_count: 10,
            completed: true,
        };
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn test_percent_partial() {
        let progress = ChallengeProgress {
            name: "Transport Hero".to_string(),
            description: String::new(),
            current_count: 5,
            target_count: 25,
            completed: false,
        };
        assert_eq!(progress.percent(), 20.0);
    }
}
