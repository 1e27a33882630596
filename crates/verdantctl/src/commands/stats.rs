//! Stats command - totals, cap progress, and streaks.
//!
//! Sections:
//! - [POINTS] cumulative and weekly totals
//! - [STREAK] current and best
//! - [ACTIVITY] entry count
//! - [DAEMON] version and uptime

use crate::client::DaemonClient;
use crate::output::{progress_bar, THIN_SEP};
use anyhow::Result;
use owo_colors::OwoColorize;
use verdant_common::TrackerConfig;

pub async fn stats() -> Result<()> {
    let config = TrackerConfig::load();
    let client = DaemonClient::from_config(&config);
    let stats = client.stats().await?;
    let health = client.health().await?;

    println!();
    println!("{}", "  Verdant Eco Statistics".bold());
    println!("{}", THIN_SEP);
    println!();

    println!("{}", "[POINTS]".cyan());
    println!("  Total:          {}", stats.total_points);
    println!(
        "  This week:      {}",
        progress_bar(stats.weekly_points, stats.weekly_cap, 20)
    );
    println!();

    println!("{}", "[STREAK]".cyan());
    println!("  Current:        {} days", stats.current_streak);
    println!("  Best:           {} days", stats.longest_streak);
    println!();

    println!("{}", "[ACTIVITY]".cyan());
    println!("  Actions logged: {}", stats.total_actions);
    println!();

    println!("{}", "[DAEMON]".cyan());
    println!("  Version:        {}", health.version);
    println!("  Uptime:         {}s", health.uptime_seconds);
    let status = if health.status == "healthy" {
        health.status.green().to_string()
    } else {
        health.status.red().to_string()
    };
    println!("  Health:         {}", status);
    println!();

    println!("{}", THIN_SEP);
    println!("  Use 'verdantctl chart' for the weekly view.");
    println!("  Use 'verdantctl badges' for milestones.");
    println!();

    Ok(())
}
