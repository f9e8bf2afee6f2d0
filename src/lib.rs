//! fitrkr-seed: exercise catalog loader
//!
//! An interactive terminal tool that bulk-loads muscle groups, exercise
//! types, categories, equipment and exercise definitions from CSV, JSON or
//! YAML files into a SQLite catalog.

pub mod cli;
pub mod core;
pub mod import;
