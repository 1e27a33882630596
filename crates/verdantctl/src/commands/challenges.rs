//! Challenges command - challenge progress bars.

use crate::client::DaemonClient;
use crate::output::{progress_bar, THIN_SEP};
use anyhow::Result;
use owo_colors::OwoColorize;
use verdant_common::TrackerConfig;

pub async fn challenges() -> Result<()> {
    let config = TrackerConfig::load();
    let client = DaemonClient::from_config(&config);
    let listing = client.challenges().await?;

    println!();
    println!("{}", "  Challenges".bold());
    println!("{}", THIN_SEP);

    for challenge in &listing.challenges {
        let bar = progress_bar(challenge.current_count, challenge.target_count, 20);
        if challenge.completed {
            println!(
                "  {:<18} {}  {}",
                challenge.name,
                bar,
                "done".green()
            );
        } else {
            println!("  {:<18} {}", challenge.name, bar);
        }
        println!("    {}", challenge.description);
    }

    println!("{}", THIN_SEP);
    println!();
    Ok(())
}
