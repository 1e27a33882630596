//! Chart command - last-7-days terminal bar chart.

use crate::client::DaemonClient;
use crate::output::{render_week_chart, THIN_SEP};
use anyhow::Result;
use owo_colors::OwoColorize;
use verdant_common::TrackerConfig;

pub async fn chart() -> Result<()> {
    let config = TrackerConfig::load();
    let client = DaemonClient::from_config(&config);
    let chart = client.week_chart().await?;

    println!();
    println!("{}", "  Eco Points - Last 7 Days".bold());
    println!("{}", THIN_SEP);
    println!("{}", render_week_chart(&chart.days));
    println!("{}", THIN_SEP);
    println!();
    Ok(())
}
