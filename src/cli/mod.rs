//! CLI module - argument parsing and the interactive menu

pub mod args;
pub mod menu;

pub use args::Cli;
