//! Init command - create the config file and database.

use crate::output::THIN_SEP;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use verdant_common::{ActionStore, TrackerConfig};

pub async fn init() -> Result<()> {
    println!();
    println!("{}", "  Verdant Setup".bold());
    println!("{}", THIN_SEP);

    let config_path =
        TrackerConfig::ensure_default().context("Failed to write default configuration")?;
    println!("  Config:    {}", config_path.display());

    let config = TrackerConfig::load();
    let db_path = config.db_path();
    ActionStore::open(&db_path)
        .with_context(|| format!("Failed to initialize database at {}", db_path.display()))?;
    println!("  Database:  {}", db_path.display());

    println!("{}", THIN_SEP);
    println!();
    println!(
        "  {} Start the daemon with 'verdantd', then log actions with",
        "Ready.".green()
    );
    println!("  'verdantctl log <category>'.");
    println!();
    Ok(())
}
