//! Badges command - milestone badges and their unlocked state.

use crate::client::DaemonClient;
use crate::output::THIN_SEP;
use anyhow::Result;
use owo_colors::OwoColorize;
use verdant_common::TrackerConfig;

pub async fn badges() -> Result<()> {
    let config = TrackerConfig::load();
    let client = DaemonClient::from_config(&config);
    let achievements = client.achievements().await?;

    println!();
    println!("{}", "  Milestone Badges".bold());
    println!("{}", THIN_SEP);

    for badge in &achievements.badges {
        let marker = if badge.unlocked { "x" } else { " " };
        let line = format!(
            "  [{}] {:>4} points  ({})",
            marker,
            badge.threshold,
            badge.tier.as_str()
        );
        if badge.unlocked {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }

    println!("{}", THIN_SEP);
    println!(
        "  {} of {} badges unlocked",
        achievements.unlocked_count,
        achievements.badges.len()
    );
    println!();
    Ok(())
}
