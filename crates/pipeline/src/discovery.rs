//! Distinct values for discovering what the catalog holds.

use data_loader::Film;
use std::collections::BTreeSet;

/// Sorted distinct screening locations across all films.
pub fn get_locations(films: &[Film]) -> Vec<String> {
    let locations: BTreeSet<&str> = films
        .iter()
        .flat_map(|film| &film.screenings)
        .filter_map(|screening| non_empty(screening.location.as_deref()))
        .collect();
    locations.into_iter().map(str::to_string).collect()
}

/// Sorted distinct directors across all films.
pub fn get_directors(films: &[Film]) -> Vec<String> {
    let directors: BTreeSet<&str> = films
        .iter()
        .filter_map(|film| non_empty(film.director.as_deref()))
        .collect();
    directors.into_iter().map(str::to_string).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
