//! Configuration management with layered hierarchy

use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Local settings file, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "fitrkr.yaml";

/// Directory upload files are listed from when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "data";

/// Log file written when nothing else is configured
pub const DEFAULT_LOG_FILE: &str = "fitrkr-seed.log";

/// Environment variable holding the database connection string
pub const CONN_STRING_VAR: &str = "DB_CONN_STRING";

/// Loader configuration with layered hierarchy
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database connection string (a SQLite path)
    pub db_conn_string: Option<String>,

    /// Directory holding the upload files
    pub data_dir: Option<PathBuf>,

    /// Where log output is written
    pub log_file: Option<PathBuf>,
}

/// Errors that stop the loader before the menu starts
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("DB_CONN_STRING environment variable is required")]
    #[diagnostic(
        code(fitrkr::config::missing_conn_string),
        help("export DB_CONN_STRING=path/to/catalog.db, or set db_conn_string in fitrkr.yaml")
    )]
    MissingConnString,

    #[error("invalid settings file {}", path.display())]
    #[diagnostic(code(fitrkr::config::invalid_file))]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("cannot read settings file {}", path.display())]
    #[diagnostic(code(fitrkr::config::unreadable_file))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/fitrkr-seed/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path)? {
                config.merge(global);
            }
        }

        // 3. Local settings file
        if let Some(local) = Self::read_file(Path::new(LOCAL_CONFIG_FILE))? {
            config.merge(local);
        }

        // 4. Environment variables
        config.apply_env(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "fitrkr-seed")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Read one settings file; a missing file is not an error
    fn read_file(path: &Path) -> Result<Option<Config>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if contents.trim().is_empty() {
            return Ok(None);
        }

        serde_yml::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::InvalidFile {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Overlay environment values, `lookup` returns a variable's value
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(conn) = non_empty(CONN_STRING_VAR) {
            self.db_conn_string = Some(conn);
        }
        if let Some(dir) = non_empty("FITRKR_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(file) = non_empty("FITRKR_LOG_FILE") {
            self.log_file = Some(PathBuf::from(file));
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.db_conn_string.is_some() {
            self.db_conn_string = other.db_conn_string;
        }
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
    }

    /// The connection string, which must be set
    pub fn conn_string(&self) -> Result<&str, ConfigError> {
        self.db_conn_string
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingConnString)
    }

    /// Directory the file picker lists
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// File the log is written to
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(matches!(
            config.conn_string(),
            Err(ConfigError::MissingConnString)
        ));
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.log_file(), PathBuf::from("fitrkr-seed.log"));
    }

    #[test]
    fn test_blank_conn_string_is_missing() {
        let config = Config {
            db_conn_string: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.conn_string().is_err());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config {
            db_conn_string: Some("file.db".to_string()),
            data_dir: Some(PathBuf::from("seed")),
            ..Default::default()
        };
        let env: HashMap<&str, &str> =
            HashMap::from([("DB_CONN_STRING", "env.db"), ("FITRKR_DATA_DIR", "")]);

        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.conn_string().unwrap(), "env.db");
        // Empty variables do not clear file values
        assert_eq!(config.data_dir(), PathBuf::from("seed"));
    }

    #[test]
    fn test_read_local_file_and_merge() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("fitrkr.yaml");
        fs::write(&path, "db_conn_string: catalog.db\ndata_dir: fixtures\n").unwrap();

        let mut config = Config {
            log_file: Some(PathBuf::from("custom.log")),
            ..Default::default()
        };
        config.merge(Config::read_file(&path).unwrap().unwrap());

        assert_eq!(config.conn_string().unwrap(), "catalog.db");
        assert_eq!(config.data_dir(), PathBuf::from("fixtures"));
        assert_eq!(config.log_file(), PathBuf::from("custom.log"));
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let tmp = tempdir().unwrap();
        assert!(Config::read_file(&tmp.path().join("none.yaml"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_unreadable_file_is_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("fitrkr.yaml");
        fs::create_dir(&path).unwrap();

        let err = Config::read_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
        assert!(err.to_string().contains("fitrkr.yaml"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("fitrkr.yaml");
        fs::write(&path, "db_conn_string: [unclosed\n").unwrap();

        assert!(matches!(
            Config::read_file(&path),
            Err(ConfigError::InvalidFile { .. })
        ));
    }
}
