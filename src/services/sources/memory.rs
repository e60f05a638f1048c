use super::CatalogSource;
use crate::{error::AppResult, models::Movie};

/// Source serving a fixed list of movies
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    movies: Vec<Movie>,
}

impl InMemorySource {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

#[async_trait::async_trait]
impl CatalogSource for InMemorySource {
    async fn fetch_movies(&self) -> AppResult<Vec<Movie>> {
        Ok(self.movies.iter().cloned().map(Movie::bounded).collect())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
