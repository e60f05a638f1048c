//! Catalog source abstraction
//!
//! The recommendation core trusts the records it is handed. Sources own
//! parsing, skipping bad rows and bounding field lengths before records
//! reach `load_catalog`.

use crate::{error::AppResult, models::Movie};

pub mod csv_file;
pub mod memory;

pub use csv_file::CsvFileSource;
pub use memory::InMemorySource;

/// Trait for movie catalog sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every movie record of the catalog
    ///
    /// Records are returned already validated and truncated to the field
    /// bounds. Duplicate identifiers are passed through untouched.
    async fn fetch_movies(&self) -> AppResult<Vec<Movie>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
