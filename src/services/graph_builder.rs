use std::time::Instant;

use super::{graph::SimilarityGraph, store::MovieStore};
use crate::models::{fold_label, Movie, MovieId, SimilarityKind};

/// Largest rating gap that still counts as similar (inclusive)
pub const RATING_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Absorbs representation error in decimal ratings such as 7.3 vs 7.8
const RATING_TOLERANCE: f64 = 1e-9;

/// Comparison keys for one movie, normalised once per build
struct PairKey {
    id: MovieId,
    genre: String,
    director: String,
    rating: f64,
}

impl From<&Movie> for PairKey {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            genre: fold_label(&movie.genre),
            director: fold_label(&movie.director),
            rating: movie.rating,
        }
    }
}

/// Whether two ratings are within the similarity threshold
pub fn ratings_similar(a: f64, b: f64) -> bool {
    (a - b).abs() <= RATING_SIMILARITY_THRESHOLD + RATING_TOLERANCE
}

fn kinds_between(a: &PairKey, b: &PairKey) -> Vec<SimilarityKind> {
    let mut kinds = Vec::with_capacity(3);
    if a.genre == b.genre {
        kinds.push(SimilarityKind::Genre);
    }
    if ratings_similar(a.rating, b.rating) {
        kinds.push(SimilarityKind::Rating);
    }
    if a.director == b.director {
        kinds.push(SimilarityKind::Director);
    }
    kinds
}

/// Builds the similarity graph by comparing every unordered pair of movies
///
/// Movies are visited in store order. Each predicate that holds for a pair
/// adds a symmetric edge pair of that kind. This is O(n²) in the catalog
/// size, which is fine for catalogs in the hundreds.
pub fn build_graph(store: &MovieStore) -> SimilarityGraph {
    let start = Instant::now();
    let keys: Vec<PairKey> = store.iter().map(PairKey::from).collect();
    let mut graph = SimilarityGraph::new();

    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            if a.id == b.id {
                continue;
            }
            for kind in kinds_between(a, b) {
                graph.add_edge(a.id, b.id, kind);
            }
        }
    }

    tracing::info!(
        movies = keys.len(),
        nodes = graph.node_count(),
        genre_edges = graph.edge_count_of(SimilarityKind::Genre),
        rating_edges = graph.edge_count_of(SimilarityKind::Rating),
        director_edges = graph.edge_count_of(SimilarityKind::Director),
        elapsed_ms = start.elapsed().as_millis(),
        "Similarity graph built"
    );

    graph
}
