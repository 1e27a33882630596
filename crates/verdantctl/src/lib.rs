//! Verdant Control library - exposes modules for testing.

pub mod client;
pub mod commands;
pub mod output;
