use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod movie;
pub mod similarity;

pub use movie::{fold_label, labels_match, Movie, MovieId};
pub use similarity::{SimilarityEdge, SimilarityKind, Weights};

/// A recommended movie with its accumulated score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredMovie {
    pub movie: Movie,
    pub score: u32,
    /// Kinds that contributed a non-zero weight, in canonical order
    pub matched_kinds: Vec<SimilarityKind>,
}

/// Summary of the catalog snapshot currently being served
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogStats {
    pub movies: usize,
    pub graph_nodes: usize,
    pub genre_edges: usize,
    pub rating_edges: usize,
    pub director_edges: usize,
    pub loaded_at: DateTime<Utc>,
}
