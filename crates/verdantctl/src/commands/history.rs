//! History command - recent entries, newest first.

use crate::client::DaemonClient;
use crate::output::THIN_SEP;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use verdant_common::TrackerConfig;

pub async fn history(limit: usize) -> Result<()> {
    let config = TrackerConfig::load();
    let client = DaemonClient::from_config(&config);
    let history = client.history(limit).await?;

    println!();
    println!("{}", "  Recent Eco-Actions".bold());
    println!("{}", THIN_SEP);

    if history.entries.is_empty() {
        println!("  No actions logged yet.");
    } else {
        for entry in &history.entries {
            let local = entry.logged_at.with_timezone(&Local);
            println!(
                "  {}  {:<16} {}",
                local.format("%Y-%m-%d %H:%M"),
                entry.category.label(),
                format!("+{}", entry.points).green()
            );
        }
        if history.total_count > history.entries.len() as i64 {
            println!();
            println!(
                "  {} of {} entries shown",
                history.entries.len(),
                history.total_count
            );
        }
    }

    println!("{}", THIN_SEP);
    println!();
    Ok(())
}
