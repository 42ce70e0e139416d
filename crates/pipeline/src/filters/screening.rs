//! Screening-level filter for location and date range.
//!
//! Unlike the other filters this one looks inside each film: it keeps only
//! the screenings that satisfy every supplied bound, and drops films that
//! have none left.

use crate::traits::Filter;
use chrono::NaiveDate;
use data_loader::{Film, Screening};

/// Narrows screenings by venue and an inclusive date range.
///
/// ## Algorithm
/// For each film:
/// 1. A screening qualifies if its location equals `location`
///    (case-insensitive) and its date lies within `[start, end]`
/// 2. A screening with a missing or malformed date fails any date bound
/// 3. The film matches if at least one screening qualifies; the copy handed
///    back keeps only the qualifying screenings
pub struct ScreeningFilter {
    location: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl ScreeningFilter {
    pub fn new(location: Option<&str>, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            location: location.map(str::to_lowercase),
            start,
            end,
        }
    }

    fn qualifies(&self, screening: &Screening) -> bool {
        if let Some(location) = &self.location {
            let at_location = screening
                .location
                .as_deref()
                .is_some_and(|l| l.to_lowercase() == *location);
            if !at_location {
                return false;
            }
        }

        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let Some(date) = screening.parsed_date() else {
            return false;
        };
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

impl Filter for ScreeningFilter {
    fn name(&self) -> &str {
        "ScreeningFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        film.screenings.iter().any(|s| self.qualifies(s))
    }

    fn narrow(&self, mut film: Film) -> Film {
        film.screenings.retain(|s| self.qualifies(s));
        film
    }
}
