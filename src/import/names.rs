//! Name-list parsers for the dimension tables

use csv::ReaderBuilder;
use serde_json::Value;
use std::io::BufReader;
use std::path::Path;

use super::{open, read_to_string, FileFormat, ParseError};

/// Parse a name list, choosing the parser from the file extension
pub fn parse_names(path: &Path) -> Result<Vec<String>, ParseError> {
    match FileFormat::from_path(path)? {
        FileFormat::Csv => parse_names_csv(path),
        FileFormat::Json => parse_names_json(path),
        FileFormat::Yaml => parse_names_yaml(path),
    }
}

/// First column of every row, skipping an optional `name` header row
pub fn parse_names_csv(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut names = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let Some(first) = record.get(0) else {
            continue;
        };
        if idx == 0 && first.eq_ignore_ascii_case("name") {
            continue;
        }

        names.push(first.to_string());
    }

    Ok(names)
}

/// String `name` fields from a JSON array of objects
pub fn parse_names_json(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = read_to_string(path)?;
    let entries: Option<Vec<Value>> = serde_json::from_str(&content)?;
    Ok(extract_names(entries.unwrap_or_default()))
}

/// String `name` fields from a YAML list of maps
pub fn parse_names_yaml(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = read_to_string(path)?;
    let entries: Option<Vec<Value>> = serde_yml::from_str(&content)?;
    Ok(extract_names(entries.unwrap_or_default()))
}

/// Entries that are not maps with a string `name` are skipped
fn extract_names(entries: Vec<Value>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(mut map) => match map.remove("name") {
                Some(Value::String(name)) => Some(name),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_csv_skips_name_header() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "equipment.csv", "name\nBarbell\nDumbbell\nBarbell\n");

        let names = parse_names_csv(&path).unwrap();
        assert_eq!(names, vec!["Barbell", "Dumbbell", "Barbell"]);
    }

    #[test]
    fn test_csv_capitalized_header_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "types.csv", "Name,notes\nStrength,heavy\nCardio,\n");

        let names = parse_names_csv(&path).unwrap();
        assert_eq!(names, vec!["Strength", "Cardio"]);
    }

    #[test]
    fn test_csv_without_header_keeps_first_row() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "muscles.csv", "Chest\nBack\n\nLegs\n");

        let names = parse_names_csv(&path).unwrap();
        assert_eq!(names, vec!["Chest", "Back", "Legs"]);
    }

    #[test]
    fn test_csv_header_only_detected_on_first_row() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "odd.csv", "Chest\nname\n");

        let names = parse_names_csv(&path).unwrap();
        assert_eq!(names, vec!["Chest", "name"]);
    }

    #[test]
    fn test_csv_quoted_fields() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "equipment.csv", "name\n\"Cable, high pulley\"\n");

        let names = parse_names_csv(&path).unwrap();
        assert_eq!(names, vec!["Cable, high pulley"]);
    }

    #[test]
    fn test_csv_malformed_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.csv");
        fs::write(&path, b"name\n\xff\xfe\n").unwrap();

        assert!(matches!(parse_names_csv(&path), Err(ParseError::Csv(_))));
    }

    #[test]
    fn test_json_extracts_string_names() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "cats.json",
            r#"[{"name": "Strength"}, {"title": "x"}, {"name": 42}, {"name": "Mobility", "id": 3}]"#,
        );

        let names = parse_names_json(&path).unwrap();
        assert_eq!(names, vec!["Strength", "Mobility"]);
    }

    #[test]
    fn test_json_skips_null_and_scalar_entries() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "equipment.json", r#"[null, {"name": "Bench"}, "Rack", 7]"#);

        let names = parse_names_json(&path).unwrap();
        assert_eq!(names, vec!["Bench"]);
    }

    #[test]
    fn test_json_syntax_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "cats.json", r#"[{"name": "Strength"}"#);

        assert!(matches!(parse_names_json(&path), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_json_requires_array_of_objects() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "cats.json", r#"{"name": "Strength"}"#);

        assert!(parse_names_json(&path).is_err());
    }

    #[test]
    fn test_yaml_extracts_string_names() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "muscles.yaml",
            "- name: Chest\n- label: nothing\n- name: Back\n  group: upper\n- name: ~\n",
        );

        let names = parse_names_yaml(&path).unwrap();
        assert_eq!(names, vec!["Chest", "Back"]);
    }

    #[test]
    fn test_yaml_skips_empty_entries() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "muscles.yaml", "- name: Chest\n-\n- name: Back\n");

        let names = parse_names_yaml(&path).unwrap();
        assert_eq!(names, vec!["Chest", "Back"]);
    }

    #[test]
    fn test_yaml_syntax_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "muscles.yml", "- name: [Chest\n");

        assert!(matches!(parse_names_yaml(&path), Err(ParseError::Yaml(_))));
    }

    #[test]
    fn test_dispatch_by_extension() {
        let tmp = TempDir::new().unwrap();
        let yaml = write_file(&tmp, "a.yml", "- name: Kettlebell\n");
        let json = write_file(&tmp, "b.json", r#"[{"name": "Bench"}]"#);
        let txt = write_file(&tmp, "c.txt", "Bench\n");

        assert_eq!(parse_names(&yaml).unwrap(), vec!["Kettlebell"]);
        assert_eq!(parse_names(&json).unwrap(), vec!["Bench"]);
        assert!(matches!(
            parse_names(&txt),
            Err(ParseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.csv");

        let err = parse_names(&path).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }
}
