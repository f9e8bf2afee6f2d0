//! SQLite-backed exercise catalog
//!
//! This module owns the single database connection and provides:
//! - Bulk insert-or-ignore uploads for the name-keyed dimension tables
//! - Get-or-insert id resolution for dimension rows
//! - A transactional writer for exercises and their junction rows
//! - Row counts for the menu badges
//!
//! Rows are only ever created here. The one update is the exercise
//! description, overwritten when an exercise with the same name is uploaded.

mod queries;
mod schema;
mod types;

pub use types::*;

use rusqlite::Connection;
use tracing::debug;

/// The catalog database
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Open (or create) the catalog described by a connection string
    ///
    /// The connection string is a SQLite path. A leading `sqlite://` or
    /// `sqlite:` scheme is accepted and stripped, and `:memory:` opens a
    /// private in-memory database.
    pub fn open(conn_string: &str) -> Result<Self, CatalogError> {
        let target = database_path(conn_string);
        let conn = Connection::open(target).map_err(|source| CatalogError::Open {
            target: target.to_string(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Open a fresh in-memory catalog
    pub fn open_in_memory() -> Result<Self, CatalogError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, CatalogError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let catalog = Self { conn };
        catalog.init_schema()?;
        Ok(catalog)
    }

    /// Row count of a table, zero when the count cannot be read
    pub fn table_count(&self, table: impl Into<Table>) -> i64 {
        let table = table.into();
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table.as_str()), [], |row| {
                row.get::<_, i64>(0)
            })
            .unwrap_or_else(|e| {
                debug!(table = table.as_str(), error = %e, "count read failed");
                0
            })
    }

    /// All menu counts in menu order
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            muscle_groups: self.table_count(NameTable::MuscleGroup),
            training_types: self.table_count(NameTable::TrainingType),
            categories: self.table_count(NameTable::Category),
            equipment: self.table_count(NameTable::Equipment),
            exercises: self.table_count(Table::Exercise),
        }
    }
}

/// Strip an optional scheme prefix from a connection string
fn database_path(conn_string: &str) -> &str {
    let trimmed = conn_string.trim();
    trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed)
}
