//! Free-text search over title, director and description.

use crate::traits::Filter;
use data_loader::Film;

/// Keeps films where the query occurs, ignoring case, in the title, the
/// director or the description. Missing fields count as empty text.
///
/// Films pass through unmodified. An empty query matches everything;
/// rejecting blank queries is up to the caller.
pub struct TextSearchFilter {
    query: String,
}

impl TextSearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }
}

impl Filter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        let contains = |field: Option<&str>| {
            field.is_some_and(|text| text.to_lowercase().contains(&self.query))
        };
        contains(Some(film.title.as_str()))
            || contains(film.director.as_deref())
            || contains(film.description.as_deref())
    }
}
