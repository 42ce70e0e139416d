//! Catalog building: ingestion, deduplication and the category index.
//!
//! Loading steps:
//! 1. Discover data files, sorted by name
//! 2. Parse every file (in parallel with Rayon; results keep file order)
//! 3. Append films file by file, in document order
//! 4. Drop later films whose title was already seen
//! 5. Rebuild the category index from the surviving films

use crate::error::Result;
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::Path;

impl Catalog {
    /// Load every `bfi_*.json` file under `data_dir`.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        Self::load_with_options(data_dir, &LoadOptions::default())
    }

    /// Load matching files under `data_dir`.
    ///
    /// Fails only on configuration problems (missing directory, no matching
    /// files). Files that cannot be parsed are skipped and show up in the
    /// catalog's `LoadReport`.
    pub fn load_with_options(data_dir: &Path, options: &LoadOptions) -> Result<Self> {
        tracing::info!("Loading film catalog from {:?}", data_dir);

        let files = parser::discover_files(data_dir, options)?;

        // collect() on an indexed parallel iterator preserves input order
        let parsed: Vec<_> = files
            .par_iter()
            .map(|path| (path, parser::parse_file(path)))
            .collect();

        let mut report = LoadReport::default();
        let mut films = Vec::new();
        for (path, result) in parsed {
            match result {
                Ok(file) => {
                    tracing::debug!(
                        "Loaded {} films from {}",
                        file.films.len(),
                        path.display()
                    );
                    report.files.push(FileOutcome::Loaded {
                        path: path.clone(),
                        films: file.films.len(),
                        rejected: file.rejected,
                    });
                    films.extend(file.films);
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    report.files.push(FileOutcome::Skipped {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let catalog = Self::build(films, report);
        tracing::info!(
            "Loaded {} films ({} screenings) from {} of {} files",
            catalog.get_film_count(),
            catalog.get_total_screenings(),
            catalog.report.files_loaded(),
            catalog.report.files_attempted()
        );
        Ok(catalog)
    }

    /// Build a catalog from records already in memory.
    ///
    /// Applies the same deduplication and indexing as a directory load.
    pub fn from_films(films: Vec<Film>) -> Self {
        Self::build(films, LoadReport::default())
    }

    fn build(films: Vec<Film>, mut report: LoadReport) -> Self {
        report.films_ingested = films.len();

        let (films, removed) = remove_duplicates(films);
        report.duplicates_removed = removed;
        if removed > 0 {
            tracing::debug!("Removed {} duplicate films", removed);
        }

        report.case_collisions = find_case_collisions(&films);
        for title in &report.case_collisions {
            tracing::warn!(
                "Title {:?} differs only by case from an earlier film; lookups will return the earlier one",
                title
            );
        }

        let mut catalog = Catalog {
            films,
            category_index: Default::default(),
            report,
        };
        catalog.build_category_index();
        catalog
    }

    /// Rebuild the category index from the current film list.
    ///
    /// Every film lands in exactly one bucket, so the buckets always
    /// partition the collection.
    fn build_category_index(&mut self) {
        self.category_index.clear();
        for (pos, film) in self.films.iter().enumerate() {
            self.category_index
                .entry(film.category().to_string())
                .or_insert_with(Vec::new)
                .push(pos);
        }
    }
}

/// Keep the first film for each exact title, preserving order.
///
/// Returns the surviving films and how many were dropped. Later duplicates
/// are discarded whole; their screenings are not merged.
fn remove_duplicates(films: Vec<Film>) -> (Vec<Film>, usize) {
    let before = films.len();
    let mut seen_titles: HashSet<String> = HashSet::with_capacity(before);
    let unique: Vec<Film> = films
        .into_iter()
        .filter(|film| seen_titles.insert(film.title.clone()))
        .collect();
    let removed = before - unique.len();
    (unique, removed)
}

/// Titles that equal an earlier title when case is ignored.
fn find_case_collisions(films: &[Film]) -> Vec<String> {
    let mut first_by_folded: HashMap<String, &str> = HashMap::new();
    let mut collisions = Vec::new();
    for film in films {
        match first_by_folded.entry(film.title.to_lowercase()) {
            Entry::Occupied(first) => {
                if *first.get() != film.title {
                    collisions.push(film.title.clone());
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(film.title.as_str());
            }
        }
    }
    collisions
}
