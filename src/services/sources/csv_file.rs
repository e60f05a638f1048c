use std::path::PathBuf;

use super::CatalogSource;
use crate::{error::AppResult, models::Movie};

/// Reads the catalog from a CSV file with an `id,title,genre,rating,director` header
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

}

/// Parses CSV catalog data
///
/// Rows that fail to deserialize or carry a rating outside 0.0-10.0 are
/// skipped with a warning. A missing or unreadable header is an error.
pub fn parse_movies(data: &[u8]) -> AppResult<Vec<Movie>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    // Fails on unreadable headers before any row is attempted
    reader.headers()?;

    let mut movies = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in reader.deserialize::<Movie>().enumerate() {
        // Header is line 1
        let line = row + 2;
        match result {
            Ok(movie) if movie.has_valid_rating() => movies.push(movie.bounded()),
            Ok(movie) => {
                skipped += 1;
                tracing::warn!(line, id = movie.id, rating = movie.rating, "Skipping row with out-of-range rating");
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!(line, error = %e, "Skipping malformed catalog row");
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(parsed = movies.len(), skipped, "Catalog parsed with skipped rows");
    }

    Ok(movies)
}

#[async_trait::async_trait]
impl CatalogSource for CsvFileSource {
    async fn fetch_movies(&self) -> AppResult<Vec<Movie>> {
        let data = tokio::fs::read(&self.path).await?;
        let movies = parse_movies(&data)?;

        tracing::info!(
            path = %self.path.display(),
            movies = movies.len(),
            "Catalog file read"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "csv-file"
    }
}
