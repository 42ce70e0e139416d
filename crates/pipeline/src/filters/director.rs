//! Filter on a fragment of the director's name.

use crate::traits::Filter;
use data_loader::Film;

/// Keeps films whose director contains the given text, ignoring case.
///
/// A film with no director never matches.
pub struct DirectorFilter {
    needle: String,
}

impl DirectorFilter {
    pub fn new(director: &str) -> Self {
        Self {
            needle: director.to_lowercase(),
        }
    }
}

impl Filter for DirectorFilter {
    fn name(&self) -> &str {
        "DirectorFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        film.director
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, director: Option<&str>) -> Film {
        Film {
            director: director.map(str::to_string),
            ..Film::new(title)
        }
    }

    #[test]
    fn test_partial_director_match() {
        let films = vec![
            film("The Abyss", Some("James Cameron")),
            film("Vertigo", Some("Alfred Hitchcock")),
            film("True Lies", Some("James Cameron")),
            film("Mystery Reel", None),
        ];

        let filtered = DirectorFilter::new("cAmErOn").apply(films);
        let titles: Vec<_> = filtered.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["The Abyss", "True Lies"]);
    }

    #[test]
    fn test_missing_director_never_matches() {
        let films = vec![film("Mystery Reel", None), film("Blank", Some(""))];
        assert!(DirectorFilter::new("a").apply(films).is_empty());
    }
}
