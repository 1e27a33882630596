//! Subcommand implementations.

mod badges;
mod challenges;
mod chart;
mod history;
mod init;
mod log;
mod reset;
mod stats;

pub use badges::badges;
pub use challenges::challenges;
pub use chart::chart;
pub use history::history;
pub use init::init;
pub use log::log;
pub use reset::reset;
pub use stats::stats;
