//! Catalog type definitions
//!
//! Table identifiers, upload rows and the catalog error type.

use thiserror::Error;

// =========================================================================
// Tables
// =========================================================================

/// A single-column, name-keyed dimension table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameTable {
    MuscleGroup,
    TrainingType,
    Category,
    Equipment,
}

impl NameTable {
    pub const ALL: [NameTable; 4] = [
        NameTable::MuscleGroup,
        NameTable::TrainingType,
        NameTable::Category,
        NameTable::Equipment,
    ];

    pub fn table_name(&self) -> &'static str {
        match self {
            NameTable::MuscleGroup => "muscle_group",
            NameTable::TrainingType => "training_type",
            NameTable::Category => "exercise_category",
            NameTable::Equipment => "equipment",
        }
    }

    /// Insert-or-ignore statement used by bulk name uploads
    pub fn insert_sql(&self) -> &'static str {
        match self {
            NameTable::MuscleGroup => {
                "INSERT INTO muscle_group (name) VALUES (?1) ON CONFLICT (name) DO NOTHING"
            }
            NameTable::TrainingType => {
                "INSERT INTO training_type (name) VALUES (?1) ON CONFLICT (name) DO NOTHING"
            }
            NameTable::Category => {
                "INSERT INTO exercise_category (name) VALUES (?1) ON CONFLICT (name) DO NOTHING"
            }
            NameTable::Equipment => {
                "INSERT INTO equipment (name) VALUES (?1) ON CONFLICT (name) DO NOTHING"
            }
        }
    }

    /// Insert-or-touch statement that always yields the row id
    ///
    /// The no-op `DO UPDATE` makes `RETURNING` fire for pre-existing rows too.
    pub fn get_or_insert_sql(&self) -> &'static str {
        match self {
            NameTable::MuscleGroup => {
                "INSERT INTO muscle_group (name) VALUES (?1)
                 ON CONFLICT (name) DO UPDATE SET name = excluded.name RETURNING id"
            }
            NameTable::TrainingType => {
                "INSERT INTO training_type (name) VALUES (?1)
                 ON CONFLICT (name) DO UPDATE SET name = excluded.name RETURNING id"
            }
            NameTable::Category => {
                "INSERT INTO exercise_category (name) VALUES (?1)
                 ON CONFLICT (name) DO UPDATE SET name = excluded.name RETURNING id"
            }
            NameTable::Equipment => {
                "INSERT INTO equipment (name) VALUES (?1)
                 ON CONFLICT (name) DO UPDATE SET name = excluded.name RETURNING id"
            }
        }
    }
}

/// Any table whose size is shown in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Names(NameTable),
    Exercise,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Names(t) => t.table_name(),
            Table::Exercise => "exercise",
        }
    }
}

impl From<NameTable> for Table {
    fn from(table: NameTable) -> Self {
        Table::Names(table)
    }
}

/// Junction tables linking an exercise to a dimension row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Junction {
    Equipment,
    TrainingType,
    Muscle,
}

impl Junction {
    pub(super) fn insert_sql(&self) -> &'static str {
        match self {
            Junction::Equipment => {
                "INSERT INTO exercise_equipment (exercise_id, equipment_id)
                 VALUES (?1, ?2) ON CONFLICT DO NOTHING"
            }
            Junction::TrainingType => {
                "INSERT INTO exercise_training_types (exercise_id, training_type_id)
                 VALUES (?1, ?2) ON CONFLICT DO NOTHING"
            }
            Junction::Muscle => {
                "INSERT INTO exercise_muscles (exercise_id, muscle_group_id)
                 VALUES (?1, ?2) ON CONFLICT DO NOTHING"
            }
        }
    }

    pub(super) fn target(&self) -> NameTable {
        match self {
            Junction::Equipment => NameTable::Equipment,
            Junction::TrainingType => NameTable::TrainingType,
            Junction::Muscle => NameTable::MuscleGroup,
        }
    }

    pub(super) fn label(&self) -> &'static str {
        match self {
            Junction::Equipment => "equipment",
            Junction::TrainingType => "type",
            Junction::Muscle => "muscle",
        }
    }
}

// =========================================================================
// Upload rows
// =========================================================================

/// One exercise definition ready to be written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseUploadRow {
    pub name: String,
    pub description: String,
    pub category: String,
    pub equipment: Vec<String>,
    pub types: Vec<String>,
    pub muscles: Vec<String>,
}

/// Row counts shown next to each menu entry, in menu order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub muscle_groups: i64,
    pub training_types: i64,
    pub categories: i64,
    pub equipment: i64,
    pub exercises: i64,
}

/// Names linked to a stored exercise
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseLinks {
    pub category: String,
    pub description: String,
    pub equipment: Vec<String>,
    pub types: Vec<String>,
    pub muscles: Vec<String>,
}

// =========================================================================
// Errors
// =========================================================================

/// Errors raised by catalog writes
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("category {name}: {source}")]
    Category {
        name: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("insert exercise {name}: {source}")]
    Exercise {
        name: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{label} {name}: {source}")]
    Dimension {
        label: &'static str,
        name: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("insert {label} junction: {source}")]
    Junction {
        label: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot open database {target}: {source}")]
    Open {
        target: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
