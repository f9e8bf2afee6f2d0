//! File import - format detection, parsers and the upload dispatcher
//!
//! Name lists can come from CSV, JSON or YAML files. Exercise definitions
//! are always read with the exercise CSV layout:
//!
//! ```text
//! Name,Description,Category,Equipment,Types,Muscles
//! Push-up,A bodyweight press,Chest,None,Strength,Chest;Triceps
//! ```

mod exercises;
mod names;
mod upload;

pub use exercises::{parse_exercises_csv, split_and_trim};
pub use names::{parse_names, parse_names_csv, parse_names_json, parse_names_yaml};
pub use upload::{upload, Operation, UploadError, UploadSummary};

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Supported upload file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
    Yaml,
}

impl FileFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            _ if ext.is_empty() => Err(ParseError::UnsupportedFormat(String::new())),
            _ => Err(ParseError::UnsupportedFormat(format!(".{}", ext))),
        }
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_ok()
    }
}

/// Errors raised while reading an upload file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("no records found")]
    NoRecords,
}

/// List uploadable files in a directory, sorted by name
///
/// Subdirectories and files with unsupported extensions are left out.
pub fn list_data_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        if FileFormat::is_supported(&path) {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    files.sort();
    Ok(files)
}

fn open(path: &Path) -> Result<File, ParseError> {
    File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_to_string(path: &Path) -> Result<String, ParseError> {
    fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.csv")).unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_path(Path::new("a.JSON")).unwrap(), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")).unwrap(), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.Yml")).unwrap(), FileFormat::Yaml);
    }

    #[test]
    fn test_unsupported_format_names_extension() {
        let err = FileFormat::from_path(Path::new("notes.txt")).unwrap_err();
        assert_eq!(err.to_string(), "unsupported file type: .txt");

        let err = FileFormat::from_path(Path::new("README")).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(ref e) if e.is_empty()));
    }

    #[test]
    fn test_list_data_files_filters_and_sorts() {
        let tmp = tempdir().unwrap();
        for name in ["muscles.yaml", "equipment.csv", "types.json", "notes.txt", "cats.yml"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::create_dir(tmp.path().join("archive.csv")).unwrap();

        let files = list_data_files(tmp.path()).unwrap();
        assert_eq!(
            files,
            vec!["cats.yml", "equipment.csv", "muscles.yaml", "types.json"]
        );
    }

    #[test]
    fn test_list_data_files_missing_directory() {
        let tmp = tempdir().unwrap();
        assert!(list_data_files(&tmp.path().join("missing")).is_err());
    }
}
