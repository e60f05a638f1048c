use chrono::{DateTime, Utc};
use std::time::Instant;

use super::{
    graph::SimilarityGraph,
    graph_builder::build_graph,
    recommender,
    sources::CatalogSource,
    store::{load_catalog, MovieStore},
    title_search,
};
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{CatalogStats, Movie, MovieId, ScoredMovie, SimilarityKind, Weights},
};

/// Immutable catalog snapshot: a movie store and the graph built from it
///
/// A snapshot is never modified after construction. Reloading produces a
/// whole new snapshot, so a store is never paired with a foreign graph.
#[derive(Debug)]
pub struct Catalog {
    store: MovieStore,
    graph: SimilarityGraph,
    loaded_at: DateTime<Utc>,
}

/// Options applied when loading a catalog from a source
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub max_movies: usize,
    pub allow_empty: bool,
}

impl From<&Config> for LoadOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_movies: config.max_catalog_size,
            allow_empty: config.allow_empty_catalog,
        }
    }
}

impl Catalog {
    /// Builds the similarity graph for a populated store
    pub fn build(store: MovieStore) -> Self {
        let graph = build_graph(&store);
        Self {
            store,
            graph,
            loaded_at: Utc::now(),
        }
    }

    /// Loads records into a store and builds its graph
    pub fn from_movies(movies: Vec<Movie>, max_movies: usize) -> AppResult<Self> {
        Ok(Self::build(load_catalog(movies, max_movies)?))
    }

    /// Fetches records from a source and builds a complete snapshot
    ///
    /// Graph construction runs on the blocking pool since it is O(n²).
    pub async fn load(source: &dyn CatalogSource, options: LoadOptions) -> AppResult<Self> {
        let start = Instant::now();
        let movies = source.fetch_movies().await?;

        if movies.is_empty() {
            if !options.allow_empty {
                tracing::error!(source = source.name(), "Catalog source returned no movies");
                return Err(AppError::EmptyCatalog);
            }
            tracing::warn!(source = source.name(), "Serving an empty catalog");
        }

        let store = load_catalog(movies, options.max_movies)?;
        let catalog = tokio::task::spawn_blocking(move || Catalog::build(store))
            .await
            .map_err(|e| AppError::Internal(format!("Graph build task failed: {}", e)))?;

        tracing::info!(
            source = source.name(),
            movies = catalog.store.len(),
            edges = catalog.graph.edge_count(),
            elapsed_ms = start.elapsed().as_millis(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    pub fn graph(&self) -> &SimilarityGraph {
        &self.graph
    }

    pub fn find_by_id(&self, id: MovieId) -> AppResult<&Movie> {
        self.store.find_by_id(id)
    }

    pub fn resolve_title(&self, name: &str) -> AppResult<&Movie> {
        title_search::resolve_title(&self.store, name)
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<&Movie> {
        title_search::search_titles(&self.store, query, limit)
    }

    /// Ranks movies similar to `base_id`
    ///
    /// Unknown base ids are reported as `NotFound`; a known movie without
    /// similarities yields an empty list.
    pub fn recommend(
        &self,
        base_id: MovieId,
        weights: Weights,
        limit: usize,
    ) -> AppResult<Vec<ScoredMovie>> {
        self.find_by_id(base_id)?;
        Ok(recommender::recommend(
            &self.graph,
            &self.store,
            base_id,
            weights,
            limit,
        ))
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            movies: self.store.len(),
            graph_nodes: self.graph.node_count(),
            genre_edges: self.graph.edge_count_of(SimilarityKind::Genre),
            rating_edges: self.graph.edge_count_of(SimilarityKind::Rating),
            director_edges: self.graph.edge_count_of(SimilarityKind::Director),
            loaded_at: self.loaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sources::MockCatalogSource;

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new(1, "A", "Sci-Fi", 8.7, "X"),
            Movie::new(2, "B", "Sci-Fi", 8.8, "X"),
            Movie::new(3, "C", "Drama", 5.0, "Y"),
        ]
    }

    fn options() -> LoadOptions {
        LoadOptions {
            max_movies: 500,
            allow_empty: false,
        }
    }

    fn mock_source(movies: Vec<Movie>) -> MockCatalogSource {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_movies()
            .times(1)
            .returning(move || Ok(movies.clone()));
        source.expect_name().return_const("mock");
        source
    }

    #[tokio::test]
    async fn test_load_builds_matching_graph() {
        let source = mock_source(movies());

        let catalog = Catalog::load(&source, options()).await.unwrap();

        assert_eq!(catalog.store().len(), 3);
        assert!(catalog.graph().has_edge(1, 2, SimilarityKind::Genre));
        let stats = catalog.stats();
        assert_eq!(stats.movies, 3);
        assert_eq!(stats.graph_nodes, 2);
        assert_eq!(stats.genre_edges, 2);
        assert_eq!(stats.rating_edges, 2);
        assert_eq!(stats.director_edges, 2);
    }

    #[tokio::test]
    async fn test_load_empty_rejected_by_default() {
        let source = mock_source(Vec::new());

        let err = Catalog::load(&source, options()).await.unwrap_err();

        assert!(matches!(err, AppError::EmptyCatalog));
    }

    #[tokio::test]
    async fn test_load_empty_allowed() {
        let source = mock_source(Vec::new());
        let options = LoadOptions {
            allow_empty: true,
            ..options()
        };

        let catalog = Catalog::load(&source, options).await.unwrap();

        assert!(catalog.store().is_empty());
        assert!(catalog.graph().is_empty());
        assert!(catalog.search("anything", 10).is_empty());
    }

    #[tokio::test]
    async fn test_load_capacity_exceeded() {
        let source = mock_source(movies());
        let options = LoadOptions {
            max_movies: 2,
            ..options()
        };

        let err = Catalog::load(&source, options).await.unwrap_err();

        assert!(matches!(err, AppError::CapacityExceeded { count: 3, limit: 2 }));
    }

    #[tokio::test]
    async fn test_load_propagates_source_error() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_movies()
            .returning(|| Err(AppError::Internal("boom".to_string())));
        source.expect_name().return_const("mock");

        assert!(matches!(
            Catalog::load(&source, options()).await,
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_recommend_unknown_base_is_not_found() {
        let catalog = Catalog::from_movies(movies(), 500).unwrap();
        assert!(matches!(
            catalog.recommend(42, Weights::new(5, 5, 5), 20),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_recommend_known_base() {
        let catalog = Catalog::from_movies(movies(), 500).unwrap();

        let results = catalog.recommend(1, Weights::new(5, 3, 7), 20).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].movie.id, 2);
        assert_eq!(results[0].score, 15);

        // Known but isolated
        assert!(catalog.recommend(3, Weights::new(5, 3, 7), 20).unwrap().is_empty());
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            max_catalog_size: 42,
            allow_empty_catalog: true,
            ..Config::default()
        };
        let options = LoadOptions::from(&config);
        assert_eq!(options.max_movies, 42);
        assert!(options.allow_empty);
    }
}
