use std::collections::{BTreeSet, HashMap};

use crate::models::{MovieId, SimilarityEdge, SimilarityKind};

/// Adjacency structure over movie ids with kind-labelled edges
///
/// Every movie maps to an ordered set of outgoing edges. Several edges to the
/// same neighbour are kept side by side when their kinds differ. Movies with
/// no discovered similarity have no node at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityGraph {
    adjacency: HashMap<MovieId, BTreeSet<SimilarityEdge>>,
}

impl SimilarityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `a -> b` and `b -> a` with the given kind
    ///
    /// Edges already present with the same (source, target, kind) are left
    /// as they are.
    pub fn add_edge(&mut self, a: MovieId, b: MovieId, kind: SimilarityKind) {
        self.add_directed_edge(a, b, kind);
        self.add_directed_edge(b, a, kind);
    }

    fn add_directed_edge(&mut self, source: MovieId, target: MovieId, kind: SimilarityKind) {
        self.adjacency
            .entry(source)
            .or_default()
            .insert(SimilarityEdge { target, kind });
    }

    /// Outgoing edges of a movie, `None` when it has no node
    pub fn edges_from(&self, id: MovieId) -> Option<&BTreeSet<SimilarityEdge>> {
        self.adjacency.get(&id)
    }

    pub fn has_edge(&self, source: MovieId, target: MovieId, kind: SimilarityKind) -> bool {
        self.adjacency
            .get(&source)
            .is_some_and(|edges| edges.contains(&SimilarityEdge { target, kind }))
    }

    /// Every directed edge as (source, edge)
    pub fn edges(&self) -> impl Iterator<Item = (MovieId, &SimilarityEdge)> {
        self.adjacency
            .iter()
            .flat_map(|(&source, edges)| edges.iter().map(move |edge| (source, edge)))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Number of directed edges of one kind
    pub fn edge_count_of(&self, kind: SimilarityKind) -> usize {
        self.edges().filter(|(_, edge)| edge.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
