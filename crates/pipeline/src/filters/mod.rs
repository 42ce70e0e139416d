//! Filter implementations for the film pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod category;
pub mod director;
pub mod screening;
pub mod text_search;

// Re-export for convenience
pub use category::CategoryFilter;
pub use director::DirectorFilter;
pub use screening::ScreeningFilter;
pub use text_search::TextSearchFilter;
