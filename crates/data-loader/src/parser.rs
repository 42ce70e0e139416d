//! Discovery and parsing of catalog data files.
//!
//! A data file is a JSON object with an optional `films` array:
//!
//! ```json
//! { "films": [ { "title": "Alien", "category": "scifi", "screenings": [] } ] }
//! ```
//!
//! Each array entry is decoded on its own, so one bad record does not cost
//! the rest of the file.

use crate::error::{DataLoadError, Result};
use crate::types::{Film, LoadOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level shape of a data file; anything besides `films` is ignored.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    films: Option<Vec<serde_json::Value>>,
}

/// Films decoded from one file.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub films: Vec<Film>,
    /// Entries of the `films` array that did not match the film schema
    pub rejected: usize,
}

/// List matching data files directly under `dir`, sorted by file name.
pub fn discover_files(dir: &Path, options: &LoadOptions) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DataLoadError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let unreadable = |source: std::io::Error| DataLoadError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() && is_data_file(&path, options) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        return Err(DataLoadError::NoDataFiles {
            path: dir.to_path_buf(),
            pattern: options.pattern(),
        });
    }
    Ok(files)
}

fn is_data_file(path: &Path, options: &LoadOptions) -> bool {
    let name_matches = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(&options.file_prefix));
    let extension_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(&options.extension));
    name_matches && extension_matches
}

/// Read and decode one data file.
pub fn parse_file(path: &Path) -> Result<ParsedFile> {
    let content = fs::read_to_string(path).map_err(|e| DataLoadError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_document(&content, path)
}

/// Decode the contents of a data file. `path` is only used for messages.
pub fn parse_document(content: &str, path: &Path) -> Result<ParsedFile> {
    let document: RawDocument =
        serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut parsed = ParsedFile::default();
    for (idx, value) in document.films.unwrap_or_default().into_iter().enumerate() {
        match serde_json::from_value::<Film>(value) {
            Ok(film) => parsed.films.push(film),
            Err(e) => {
                tracing::warn!(
                    "Skipping film #{} in {}: {}",
                    idx + 1,
                    path.display(),
                    e
                );
                parsed.rejected += 1;
            }
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ParsedFile> {
        parse_document(content, Path::new("bfi_test.json"))
    }

    #[test]
    fn test_parse_films_in_document_order() {
        let parsed = parse(
            r#"{"films": [{"title": "Aliens"}, {"title": "The Abyss", "director": "James Cameron"}]}"#,
        )
        .unwrap();
        let titles: Vec<_> = parsed.films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Aliens", "The Abyss"]);
        assert_eq!(parsed.rejected, 0);
    }

    #[test]
    fn test_missing_films_field_is_empty() {
        let parsed = parse(r#"{"scraped_at": "2025-10-01"}"#).unwrap();
        assert!(parsed.films.is_empty());

        let parsed = parse(r#"{"films": null}"#).unwrap();
        assert!(parsed.films.is_empty());
    }

    #[test]
    fn test_bad_record_is_rejected_not_fatal() {
        let parsed = parse(r#"{"films": [{"director": "No Title"}, {"title": "Titanic"}]}"#).unwrap();
        assert_eq!(parsed.films.len(), 1);
        assert_eq!(parsed.films[0].title, "Titanic");
        assert_eq!(parsed.rejected, 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse(r#"{"films": [ {"title": "Broken" "#).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));

        // Top level must be an object
        let err = parse(r#"[{"title": "Alien"}]"#).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }

    #[test]
    fn test_is_data_file() {
        let options = LoadOptions::default();
        assert!(is_data_file(Path::new("data/bfi_cameron.json"), &options));
        assert!(is_data_file(Path::new("data/bfi_classics.JSON"), &options));
        assert!(!is_data_file(Path::new("data/cameron.json"), &options));
        assert!(!is_data_file(Path::new("data/bfi_notes.txt"), &options));
    }
}
