//! Exercise CSV parser
//!
//! Columns: name, description, category, equipment, types, muscles. The last
//! three hold `;`-separated lists.

use csv::{ReaderBuilder, StringRecord};
use std::io::BufReader;
use std::path::Path;

use crate::core::catalog::ExerciseUploadRow;

use super::{open, ParseError};

/// Number of columns an exercise row must have
const EXERCISE_COLUMNS: usize = 6;

/// Separator inside the list columns
const LIST_SEPARATOR: char = ';';

/// Parse an exercise CSV file into upload rows
///
/// The first row is always treated as the header. Rows with fewer than six
/// columns are dropped. A file without any data row is an error.
pub fn parse_exercises_csv(path: &Path) -> Result<Vec<ExerciseUploadRow>, ParseError> {
    let file = open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    let mut data_rows = 0usize;

    for result in rdr.records() {
        let record = result?;
        data_rows += 1;

        if let Some(row) = map_record(&record) {
            rows.push(row);
        }
    }

    if data_rows == 0 {
        return Err(ParseError::NoRecords);
    }

    Ok(rows)
}

/// Convert one CSV record into an upload row
fn map_record(record: &StringRecord) -> Option<ExerciseUploadRow> {
    if record.len() < EXERCISE_COLUMNS {
        return None;
    }

    let field = move |idx: usize| record.get(idx).unwrap_or_default();

    Some(ExerciseUploadRow {
        name: field(0).trim().to_string(),
        description: field(1).trim().to_string(),
        category: field(2).trim().to_string(),
        equipment: split_and_trim(field(3), LIST_SEPARATOR),
        types: split_and_trim(field(4), LIST_SEPARATOR),
        muscles: split_and_trim(field(5), LIST_SEPARATOR),
    })
}

/// Split a list column, trimming whitespace and quotes from each item
///
/// Items that end up empty are dropped.
pub fn split_and_trim(value: &str, sep: char) -> Vec<String> {
    value
        .split(sep)
        .map(|part| part.trim().trim_matches('"').trim())
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
