//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, plus the two
//! entry points callers use: `filter_films` and `search_films`.

use crate::criteria::FilmCriteria;
use crate::filters::{CategoryFilter, DirectorFilter, ScreeningFilter, TextSearchFilter};
use crate::traits::Filter;
use data_loader::Film;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter::new("james_cameron"))
///     .add_filter(ScreeningFilter::new(Some("BFI IMAX"), None, None));
///
/// let filtered = pipeline.select(catalog.get_all_films());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline that enforces every supplied criterion.
    ///
    /// Cheap film-level filters run before the screening-level one.
    pub fn from_criteria(criteria: &FilmCriteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(category) = criteria.category() {
            pipeline = pipeline.add_filter(CategoryFilter::new(category));
        }
        if let Some(director) = criteria.director() {
            pipeline = pipeline.add_filter(DirectorFilter::new(director));
        }
        if criteria.filters_screenings() {
            pipeline = pipeline.add_filter(ScreeningFilter::new(
                criteria.location(),
                criteria.start_date,
                criteria.end_date,
            ));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the films.
    ///
    /// A film survives only if every filter keeps it, so the criteria are
    /// combined with AND. Relative order is preserved.
    pub fn apply(&self, films: Vec<Film>) -> Vec<Film> {
        let mut current = films;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Apply all filters to borrowed films, cloning only the survivors.
    ///
    /// Same result as `apply(films.to_vec())`.
    pub fn select(&self, films: &[Film]) -> Vec<Film> {
        let mut current: Vec<&Film> = films.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|film| filter.matches(film));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }

        current
            .into_iter()
            .map(|film| {
                self.filters
                    .iter()
                    .fold(film.clone(), |film, filter| filter.narrow(film))
            })
            .collect()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Films satisfying every criterion in `criteria`.
///
/// The input is never modified. When location or dates are supplied, the
/// returned films carry only their matching screenings.
pub fn filter_films(films: &[Film], criteria: &FilmCriteria) -> Vec<Film> {
    FilterPipeline::from_criteria(criteria).select(films)
}

/// Films whose title, director or description contains `query`,
/// ignoring case. Films are returned unmodified, in input order.
pub fn search_films(films: &[Film], query: &str) -> Vec<Film> {
    FilterPipeline::new()
        .add_filter(TextSearchFilter::new(query))
        .select(films)
}
