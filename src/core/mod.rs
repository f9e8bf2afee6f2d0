//! Core module - configuration, logging and the catalog store

pub mod catalog;
pub mod config;
pub mod logging;

pub use catalog::{Catalog, CatalogError, ExerciseUploadRow, NameTable, Table, TableCounts};
pub use config::{Config, ConfigError};
