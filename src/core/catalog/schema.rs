//! Database schema initialization

use super::{Catalog, CatalogError};

impl Catalog {
    /// Create all catalog tables if they do not exist yet
    pub(super) fn init_schema(&self) -> Result<(), CatalogError> {
        self.conn.execute_batch(
            r#"
            -- Dimension tables, keyed by a unique non-empty name
            CREATE TABLE IF NOT EXISTS muscle_group (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE CHECK (name <> '')
            );

            CREATE TABLE IF NOT EXISTS training_type (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE CHECK (name <> '')
            );

            CREATE TABLE IF NOT EXISTS exercise_category (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE CHECK (name <> '')
            );

            CREATE TABLE IF NOT EXISTS equipment (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE CHECK (name <> '')
            );

            -- Exercises
            CREATE TABLE IF NOT EXISTS exercise (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE CHECK (name <> ''),
                description TEXT NOT NULL DEFAULT '',
                category_id INTEGER NOT NULL REFERENCES exercise_category(id)
            );
            CREATE INDEX IF NOT EXISTS idx_exercise_category ON exercise(category_id);

            -- Junction tables
            CREATE TABLE IF NOT EXISTS exercise_equipment (
                exercise_id INTEGER NOT NULL REFERENCES exercise(id),
                equipment_id INTEGER NOT NULL REFERENCES equipment(id),
                PRIMARY KEY (exercise_id, equipment_id)
            );

            CREATE TABLE IF NOT EXISTS exercise_training_types (
                exercise_id INTEGER NOT NULL REFERENCES exercise(id),
                training_type_id INTEGER NOT NULL REFERENCES training_type(id),
                PRIMARY KEY (exercise_id, training_type_id)
            );

            CREATE TABLE IF NOT EXISTS exercise_muscles (
                exercise_id INTEGER NOT NULL REFERENCES exercise(id),
                muscle_group_id INTEGER NOT NULL REFERENCES muscle_group(id),
                PRIMARY KEY (exercise_id, muscle_group_id)
            );
            "#,
        )?;

        Ok(())
    }
}
