//! Core domain types for the screening catalog.
//!
//! Records arrive as loosely structured JSON. Each field that may be missing
//! is an explicit `Option` here, so a misspelled field name is a compile
//! error rather than a silent "absent" value.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Category assigned to films whose record carries none.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Date format used by screening dates and date-range bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Film-related Types
// =============================================================================

/// One film, its descriptive metadata and its scheduled screenings.
///
/// Only `title` is required. Display-only fields are kept as free-form
/// strings exactly as they appear in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_year: Option<String>,
    /// An explicit `null` reads as no screenings
    #[serde(default, deserialize_with = "null_as_empty")]
    pub screenings: Vec<Screening>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Film {
    /// Create a film with only a title; every other field is empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: None,
            director: None,
            cast: None,
            description: None,
            runtime: None,
            format: None,
            rating: None,
            country_year: None,
            screenings: Vec::new(),
        }
    }

    /// The film's category, or `"unknown"` when the record has none.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Number of scheduled screenings.
    pub fn screening_count(&self) -> usize {
        self.screenings.len()
    }
}

/// One scheduled showing of a film.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Screening {
    /// `YYYY-MM-DD`; needed for date-range filtering to apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Venue or cinema room, e.g. "NFT1" or "BFI IMAX"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Screening {
    /// The screening date, if present and well formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), DATE_FORMAT).ok())
    }
}

// =============================================================================
// Load bookkeeping
// =============================================================================

/// Knobs for discovering data files in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Only files whose name starts with this prefix are loaded
    pub file_prefix: String,
    /// Required file extension, compared case-insensitively
    pub extension: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            file_prefix: "bfi_".to_string(),
            extension: "json".to_string(),
        }
    }
}

impl LoadOptions {
    /// Glob-like description of what is matched, for messages.
    pub fn pattern(&self) -> String {
        format!("{}*.{}", self.file_prefix, self.extension)
    }
}

/// What happened to one data file during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// File decoded; `films` records were ingested and `rejected` were not
    Loaded {
        path: PathBuf,
        films: usize,
        rejected: usize,
    },
    /// File could not be read or decoded and contributed nothing
    Skipped { path: PathBuf, reason: String },
}

impl FileOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Loaded { path, .. } | FileOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped { .. })
    }
}

/// Aggregate outcome of building a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// One entry per discovered file, in processing order
    pub files: Vec<FileOutcome>,
    /// Film records ingested before deduplication
    pub films_ingested: usize,
    /// Records dropped because an earlier film had the same title
    pub duplicates_removed: usize,
    /// Titles that survived dedup but collide with another title when case is ignored
    pub case_collisions: Vec<String>,
}

impl LoadReport {
    pub fn files_attempted(&self) -> usize {
        self.files.len()
    }

    pub fn files_skipped(&self) -> usize {
        self.files.iter().filter(|f| f.is_skipped()).count()
    }

    pub fn files_loaded(&self) -> usize {
        self.files_attempted() - self.files_skipped()
    }
}

// =============================================================================
// Catalog - The In-Memory Collection
// =============================================================================

/// Deduplicated films plus a category index over them.
///
/// The index stores positions into `films`, so both views share the same
/// records. A catalog is immutable once built; load again to refresh it.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) films: Vec<Film>,
    /// Category name -> positions in `films`, in film order
    pub(crate) category_index: BTreeMap<String, Vec<usize>>,
    pub(crate) report: LoadReport,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All films, in first-seen order.
    pub fn get_all_films(&self) -> &[Film] {
        &self.films
    }

    /// Case-insensitive title lookup; the first match wins.
    pub fn get_film_by_title(&self, title: &str) -> Option<&Film> {
        let wanted = title.to_lowercase();
        self.films.iter().find(|f| f.title.to_lowercase() == wanted)
    }

    /// Films in a category, compared case-insensitively.
    ///
    /// Unknown categories yield an empty list.
    pub fn get_films_by_category(&self, category: &str) -> Vec<&Film> {
        let wanted = category.to_lowercase();
        let mut positions: Vec<usize> = self
            .category_index
            .iter()
            .filter(|(name, _)| name.to_lowercase() == wanted)
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();
        // Several buckets can match when names differ only by case
        positions.sort_unstable();
        positions.into_iter().map(|i| &self.films[i]).collect()
    }

    /// Distinct category names, sorted.
    pub fn get_categories(&self) -> Vec<&str> {
        self.category_index.keys().map(String::as_str).collect()
    }

    /// Number of films in a category bucket (exact name).
    pub fn category_size(&self, category: &str) -> usize {
        self.category_index.get(category).map_or(0, Vec::len)
    }

    pub fn get_film_count(&self) -> usize {
        self.films.len()
    }

    pub fn get_total_screenings(&self) -> usize {
        self.films.iter().map(Film::screening_count).sum()
    }

    /// Report of the load that built this catalog.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_defaults_from_json() {
        let film: Film = serde_json::from_str(r#"{"title": "Alien"}"#).unwrap();
        assert_eq!(film.title, "Alien");
        assert_eq!(film.category(), UNKNOWN_CATEGORY);
        assert!(film.director.is_none());
        assert!(film.screenings.is_empty());
    }

    #[test]
    fn test_null_screenings_read_as_empty() {
        let film: Film = serde_json::from_str(r#"{"title": "Jaws", "screenings": null}"#).unwrap();
        assert_eq!(film.title, "Jaws");
        assert!(film.screenings.is_empty());

        // Wrong shape is still an error
        let result: serde_json::Result<Film> =
            serde_json::from_str(r#"{"title": "Jaws", "screenings": "soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_film_requires_title() {
        let result: serde_json::Result<Film> = serde_json::from_str(r#"{"director": "Ridley Scott"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let film: Film = serde_json::from_str(
            r#"{"title": "Jaws", "poster_url": "x.jpg", "screenings": [{"date": "2025-10-20", "room": 3}]}"#,
        )
        .unwrap();
        assert_eq!(film.screenings.len(), 1);
        assert_eq!(film.screenings[0].date.as_deref(), Some("2025-10-20"));
    }

    #[test]
    fn test_screening_parsed_date() {
        let good = Screening {
            date: Some("2025-11-01".to_string()),
            ..Default::default()
        };
        let bad = Screening {
            date: Some("1st November".to_string()),
            ..Default::default()
        };
        assert_eq!(good.parsed_date(), NaiveDate::from_ymd_opt(2025, 11, 1));
        assert_eq!(bad.parsed_date(), None);
        assert_eq!(Screening::default().parsed_date(), None);
    }

    #[test]
    fn test_load_report_counts() {
        let report = LoadReport {
            files: vec![
                FileOutcome::Loaded {
                    path: PathBuf::from("bfi_a.json"),
                    films: 3,
                    rejected: 0,
                },
                FileOutcome::Skipped {
                    path: PathBuf::from("bfi_b.json"),
                    reason: "bad json".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(report.files_attempted(), 2);
        assert_eq!(report.files_skipped(), 1);
        assert_eq!(report.files_loaded(), 1);
    }

    #[test]
    fn test_pattern() {
        assert_eq!(LoadOptions::default().pattern(), "bfi_*.json");
    }
}
