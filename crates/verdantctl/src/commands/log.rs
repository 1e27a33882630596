//! Log command - record an eco-action.

use crate::client::DaemonClient;
use anyhow::Result;
use owo_colors::OwoColorize;
use verdant_common::{achievements, scoring, Category, TrackerConfig};

pub async fn log(category: &str) -> Result<()> {
    // Parse locally first so a typo gets the category table instead of a
    // round-trip; the daemon validates again regardless.
    let category = match category.parse::<Category>() {
        Ok(category) => category,
        Err(err) => {
            println!();
            println!("  {}", err.to_string().red());
            println!();
            println!("  Available categories:");
            for c in Category::ALL {
                println!("    {:<18} +{} pts", c.label(), c.points());
            }
            println!();
            std::process::exit(1);
        }
    };

    let config = TrackerConfig::load();
    let client = DaemonClient::from_config(&config);
    let logged = client.log_action(category.label()).await?;

    println!();
    println!(
        "  {} Logged '{}' for {} points",
        "+".green(),
        logged.category,
        logged.points_awarded
    );
    println!(
        "  Weekly: {} / {} points",
        logged.weekly_points, logged.weekly_cap
    );
    if logged.cap_reached {
        println!(
            "  {}",
            "Weekly cap reached - new points no longer raise the weekly total.".yellow()
        );
    } else {
        println!(
            "  {} points until the weekly cap",
            scoring::cap_remaining(logged.weekly_points)
        );
    }
    if logged.current_streak > 1 {
        println!("  Streak: {} days", logged.current_streak);
    }
    for threshold in &logged.new_badges {
        println!("  {}", achievements::format_unlock(*threshold).yellow());
    }
    println!();
    Ok(())
}
