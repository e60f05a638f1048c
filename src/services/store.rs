use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieId},
};

/// Keyed container of movies
///
/// Movies live in an insertion-ordered arena with a hash index on top, so
/// lookups are O(1) expected and iteration order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
    index: HashMap<MovieId, usize>,
}

impl MovieStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` movies
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            movies: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Adds a movie under its identifier
    ///
    /// Duplicate identifiers are rejected and the store is left unchanged.
    pub fn insert(&mut self, movie: Movie) -> AppResult<()> {
        if self.index.contains_key(&movie.id) {
            return Err(AppError::DuplicateId(movie.id));
        }
        self.index.insert(movie.id, self.movies.len());
        self.movies.push(movie);
        Ok(())
    }

    /// Looks up a movie by identifier
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.index.get(&id).map(|&slot| &self.movies[slot])
    }

    /// Looks up a movie, reporting absence as `NotFound`
    pub fn find_by_id(&self, id: MovieId) -> AppResult<&Movie> {
        self.get(id)
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
    }

    /// Iterates movies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Bulk-loads already parsed records into a new store
///
/// Fails fast with `CapacityExceeded` when there are more records than
/// `max_movies`, and with `DuplicateId` on the first repeated identifier.
pub fn load_catalog(records: Vec<Movie>, max_movies: usize) -> AppResult<MovieStore> {
    if records.len() > max_movies {
        return Err(AppError::CapacityExceeded {
            count: records.len(),
            limit: max_movies,
        });
    }

    let mut store = MovieStore::with_capacity(records.len());
    for movie in records {
        store.insert(movie)?;
    }

    tracing::debug!(movies = store.len(), "Catalog records loaded into store");

    Ok(store)
}
