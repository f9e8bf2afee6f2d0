//! Upload dispatcher - route a file to its parser and catalog writer

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::core::catalog::{Catalog, CatalogError, NameTable, TableCounts};

use super::{parse_exercises_csv, parse_names, ParseError};

/// The upload operations offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    MuscleGroups,
    ExerciseTypes,
    Categories,
    Equipment,
    Exercises,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::MuscleGroups,
        Operation::ExerciseTypes,
        Operation::Categories,
        Operation::Equipment,
        Operation::Exercises,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::MuscleGroups => "Upload Muscle Groups",
            Operation::ExerciseTypes => "Upload Exercise Types",
            Operation::Categories => "Upload Exercise Categories",
            Operation::Equipment => "Upload Equipments",
            Operation::Exercises => "Upload Exercises",
        }
    }

    /// Target table for the simple name-list uploads
    pub fn name_table(&self) -> Option<NameTable> {
        match self {
            Operation::MuscleGroups => Some(NameTable::MuscleGroup),
            Operation::ExerciseTypes => Some(NameTable::TrainingType),
            Operation::Categories => Some(NameTable::Category),
            Operation::Equipment => Some(NameTable::Equipment),
            Operation::Exercises => None,
        }
    }

    /// The count shown next to this operation in the menu
    pub fn count(&self, counts: &TableCounts) -> i64 {
        match self {
            Operation::MuscleGroups => counts.muscle_groups,
            Operation::ExerciseTypes => counts.training_types,
            Operation::Categories => counts.categories,
            Operation::Equipment => counts.equipment,
            Operation::Exercises => counts.exercises,
        }
    }
}

/// Outcome of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub operation: Operation,
    pub records: usize,
}

impl UploadSummary {
    pub fn message(&self) -> String {
        match self.operation {
            Operation::Exercises => format!("Successfully uploaded {} exercises!", self.records),
            _ => format!("Successfully uploaded {} entries!", self.records),
        }
    }
}

/// Why an upload failed; the display text is shown to the user as-is
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Error parsing file: {0}")]
    Parse(ParseError),

    #[error("Error parsing exercises CSV: {0}")]
    ExerciseParse(ParseError),

    #[error("DB error: {0}")]
    Database(#[from] CatalogError),
}

/// Parse `path` and write its records for `operation`
///
/// Every file is first read as a name list using its extension. Exercise
/// uploads then read the same file again with the exercise CSV layout.
pub fn upload(
    catalog: &mut Catalog,
    operation: Operation,
    path: &Path,
) -> Result<UploadSummary, UploadError> {
    info!(?operation, file = %path.display(), "upload started");

    let result = run_upload(catalog, operation, path);
    match &result {
        Ok(summary) => info!(?operation, records = summary.records, "upload finished"),
        Err(e) => warn!(?operation, file = %path.display(), error = %e, "upload failed"),
    }
    result
}

fn run_upload(
    catalog: &mut Catalog,
    operation: Operation,
    path: &Path,
) -> Result<UploadSummary, UploadError> {
    let names = parse_names(path).map_err(UploadError::Parse)?;

    let records = match operation.name_table() {
        Some(table) => catalog.insert_names(table, &names)?,
        None => {
            let rows = parse_exercises_csv(path).map_err(UploadError::ExerciseParse)?;
            catalog.insert_exercises(&rows)?
        }
    };

    Ok(UploadSummary { operation, records })
}
