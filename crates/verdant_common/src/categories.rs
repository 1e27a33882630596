//! Eco-action categories and their fixed point table.
//!
//! The table is a process-wide constant: six predefined activities, each
//! worth a fixed number of eco-points. Categories are stored and served by
//! their display label.

use crate::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A predefined eco-friendly activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Recycle,
    Bike,
    Walk,
    #[serde(rename = "Public Transport")]
    PublicTransport,
    #[serde(rename = "Plant Seed")]
    PlantSeed,
    #[serde(rename = "Pick Up Trash")]
    PickUpTrash,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Recycle,
        Category::Bike,
        Category::Walk,
        Category::PublicTransport,
        Category::PlantSeed,
        Category::PickUpTrash,
    ];

    /// Eco-points awarded per logged action.
    pub fn points(&self) -> i64 {
        match self {
            Category::Recycle => 10,
            Category::Bike => 20,
            Category::Walk => 15,
            Category::PublicTransport => 15,
            Category::PlantSeed => 30,
            Category::PickUpTrash => 5,
        }
    }

    /// Display label, also the stored representation.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Recycle => "Recycle",
            Category::Bike => "Bike",
            Category::Walk => "Walk",
            Category::PublicTransport => "Public Transport",
            Category::PlantSeed => "Plant Seed",
            Category::PickUpTrash => "Pick Up Trash",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    /// Parse a category name. Case-insensitive; hyphens and underscores
    /// are treated as spaces so CLI forms like "public-transport" work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            "recycle" => Ok(Category::Recycle),
            "bike" => Ok(Category::Bike),
            "walk" => Ok(Category::Walk),
            "public transport" => Ok(Category::PublicTransport),
            "plant seed" => Ok(Category::PlantSeed),
            "pick up trash" => Ok(Category::PickUpTrash),
            _ => Err(TrackerError::UnknownCategory(s.trim().to_string())),
        }
    }
}
