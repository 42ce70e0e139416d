//! Filtering and search over film collections.
//!
//! This crate provides:
//! - Filter trait and implementations for film filtering
//! - FilterPipeline for composing filters
//! - `filter_films` / `search_films` entry points
//! - Distinct-value helpers (`get_locations`, `get_directors`)
//!
//! Every function here is pure: it takes a slice of films and returns a
//! new collection, leaving the catalog it came from untouched.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_films, search_films, FilmCriteria};
//!
//! let films = catalog.get_all_films();
//!
//! let criteria = FilmCriteria::new()
//!     .with_location("BFI IMAX")
//!     .with_start_date(parse_date("2025-10-24").unwrap());
//! let imax = filter_films(films, &criteria);
//!
//! let hitchcock = search_films(films, "hitchcock");
//! ```

pub mod traits;
pub mod criteria;
pub mod filters;
pub mod filter_pipeline;
pub mod discovery;

// Re-export main types
pub use traits::Filter;
pub use criteria::{parse_date, FilmCriteria};
pub use filter_pipeline::{filter_films, search_films, FilterPipeline};
pub use discovery::{get_directors, get_locations};
