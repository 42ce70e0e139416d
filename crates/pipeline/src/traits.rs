//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to film collections.

use data_loader::Film;

/// Core trait for filtering films.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared between concurrent readers
/// - `matches` only borrows, so a film is decided on before anyone clones it
/// - `narrow` gets an owned copy of a film that matched and may trim its
///   screenings; the catalog the copy came from is untouched
/// - Filters must keep the relative order of the films they retain
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `film` survives this filter.
    ///
    /// Filtering cannot fail: a film that cannot be evaluated (for example a
    /// screening with a malformed date) simply does not match.
    fn matches(&self, film: &Film) -> bool;

    /// Trim a surviving film. Most filters keep films whole.
    fn narrow(&self, film: Film) -> Film {
        film
    }

    /// Apply this filter to an owned set of films.
    fn apply(&self, films: Vec<Film>) -> Vec<Film> {
        films
            .into_iter()
            .filter(|film| self.matches(film))
            .map(|film| self.narrow(film))
            .collect()
    }
}
