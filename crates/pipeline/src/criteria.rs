//! Caller-supplied filter criteria.

use chrono::NaiveDate;
use data_loader::DATE_FORMAT;

/// Up to five independent, conjunctive criteria for `filter_films`.
///
/// Blank strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmCriteria {
    /// Exact category, case-insensitive
    pub category: Option<String>,
    /// Exact screening location, case-insensitive
    pub location: Option<String>,
    /// Substring of the director, case-insensitive
    pub director: Option<String>,
    /// Earliest screening date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest screening date, inclusive
    pub end_date: Option<NaiveDate>,
}

impl FilmCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub(crate) fn category(&self) -> Option<&str> {
        supplied(&self.category)
    }

    pub(crate) fn location(&self) -> Option<&str> {
        supplied(&self.location)
    }

    pub(crate) fn director(&self) -> Option<&str> {
        supplied(&self.director)
    }

    /// True when location or a date bound is set, i.e. filtering happens
    /// per screening.
    pub fn filters_screenings(&self) -> bool {
        self.location().is_some() || self.start_date.is_some() || self.end_date.is_some()
    }

    /// True when no criterion is supplied.
    pub fn is_empty(&self) -> bool {
        self.category().is_none() && self.director().is_none() && !self.filters_screenings()
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
