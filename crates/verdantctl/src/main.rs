//! Verdant Control - CLI client for the Verdant eco tracker
//!
//! Provides the user interface to log actions and view progress.

use anyhow::Result;
use clap::{Parser, Subcommand};
use verdantctl::commands;

#[derive(Parser)]
#[command(name = "verdantctl")]
#[command(about = "Verdant - log eco-actions and track your impact", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database and default configuration
    Init,

    /// Log an eco-action
    Log {
        /// Category name, e.g. "recycle" or "public-transport"
        category: String,
    },

    /// Show point totals and streaks
    Stats,

    /// Show recent entries
    History {
        /// Maximum entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show the last-7-days point chart
    Chart,

    /// Show milestone badges
    Badges,

    /// Show challenge progress
    Challenges,

    /// Delete all logged data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init().await,
        Commands::Log { category } => commands::log(&category).await,
        Commands::Stats => commands::stats().await,
        Commands::History { limit } => commands::history(limit).await,
        Commands::Chart => commands::chart().await,
        Commands::Badges => commands::badges().await,
        Commands::Challenges => commands::challenges().await,
        Commands::Reset { yes } => commands::reset(yes).await,
    }
}
