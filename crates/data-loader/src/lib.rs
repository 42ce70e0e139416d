//! # Data Loader Crate
//!
//! This crate loads the film screening catalog from a directory of JSON files.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Film, Screening, Catalog, LoadReport)
//! - **parser**: Discover data files and decode them into Rust structs
//! - **index**: Merge, deduplicate and build the category index
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! // Load every bfi_*.json file under data/
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//!
//! let film = catalog.get_film_by_title("the terminator").unwrap();
//! println!("{} has {} screenings", film.title, film.screenings.len());
//! println!("Categories: {:?}", catalog.get_categories());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Constants
    DATE_FORMAT,
    UNKNOWN_CATEGORY,
    // Core types
    Catalog,
    Film,
    Screening,
    // Load bookkeeping
    FileOutcome,
    LoadOptions,
    LoadReport,
};
