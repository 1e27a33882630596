//! Reset command - wipe all logged data.

use crate::client::DaemonClient;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use verdant_common::TrackerConfig;

pub async fn reset(yes: bool) -> Result<()> {
    if !yes {
        println!();
        println!(
            "  {}",
            "This deletes every logged action, streak, and challenge progress.".yellow()
        );
        print!("  Type 'reset' to confirm: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        if line.trim() != "reset" {
            println!("  Aborted.");
            return Ok(());
        }
    }

    let config = TrackerConfig::load();
    let client = DaemonClient::from_config(&config);
    let result = client.reset().await?;

    println!();
    println!(
        "  All data reset ({} entries removed).",
        result.entries_removed
    );
    println!();
    Ok(())
}
