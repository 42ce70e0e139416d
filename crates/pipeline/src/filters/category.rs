//! Filter to keep films of a single category.

use crate::traits::Filter;
use data_loader::Film;

/// Keeps films whose category equals the wanted one, ignoring case.
///
/// Films without a category are in `"unknown"`, so they only survive when
/// that is the category asked for.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_lowercase(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        film.category().to_lowercase() == self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, category: Option<&str>) -> Film {
        Film {
            category: category.map(str::to_string),
            ..Film::new(title)
        }
    }

    fn titles(films: &[Film]) -> Vec<&str> {
        films.iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn test_category_filter() {
        let films = vec![
            film("Aliens", Some("james_cameron")),
            film("Elf", Some("christmas_films")),
            film("Titanic", Some("James_Cameron")),
            film("Heat", None),
        ];

        let filtered = CategoryFilter::new("JAMES_CAMERON").apply(films);
        assert_eq!(titles(&filtered), vec!["Aliens", "Titanic"]);
    }

    #[test]
    fn test_missing_category_is_unknown() {
        let films = vec![film("Heat", None), film("Elf", Some("christmas_films"))];

        let filtered = CategoryFilter::new("unknown").apply(films.clone());
        assert_eq!(titles(&filtered), vec!["Heat"]);

        assert!(CategoryFilter::new("unknown_category").apply(films).is_empty());
    }
}
