use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use super::{graph::SimilarityGraph, store::MovieStore};
use crate::models::{MovieId, ScoredMovie, SimilarityKind, Weights};

/// Neighbour of the base movie accumulating score during one query
#[derive(Debug, Default)]
struct Candidate {
    score: u32,
    kinds: BTreeSet<SimilarityKind>,
}

/// Ranks the neighbours of `base_id` by weighted edge score
///
/// Each outgoing edge adds the weight of its kind to the neighbour it points
/// at. Neighbours whose total stays at zero are dropped. The rest are sorted
/// by score, then rating (both descending), then id ascending, and at most
/// `limit` are returned. A base movie without edges yields an empty list.
pub fn recommend(
    graph: &SimilarityGraph,
    store: &MovieStore,
    base_id: MovieId,
    weights: Weights,
    limit: usize,
) -> Vec<ScoredMovie> {
    let Some(edges) = graph.edges_from(base_id) else {
        return Vec::new();
    };

    let mut candidates: HashMap<MovieId, Candidate> = HashMap::new();
    for edge in edges.iter().filter(|edge| edge.target != base_id) {
        let weight = weights.for_kind(edge.kind);
        let candidate = candidates.entry(edge.target).or_default();
        candidate.score = candidate.score.saturating_add(weight);
        if weight > 0 {
            candidate.kinds.insert(edge.kind);
        }
    }

    let mut ranked: Vec<ScoredMovie> = candidates
        .into_iter()
        .filter(|(_, candidate)| candidate.score > 0)
        .filter_map(|(id, candidate)| {
            store.get(id).map(|movie| ScoredMovie {
                movie: movie.clone(),
                score: candidate.score,
                matched_kinds: candidate.kinds.into_iter().collect(),
            })
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(limit);
    ranked
}

fn compare_ranked(a: &ScoredMovie, b: &ScoredMovie) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.movie.rating.total_cmp(&a.movie.rating))
        .then_with(|| a.movie.id.cmp(&b.movie.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;
    use crate::services::{graph_builder::build_graph, store::load_catalog};

    fn catalog(movies: Vec<Movie>) -> (SimilarityGraph, MovieStore) {
        let store = load_catalog(movies, 500).unwrap();
        (build_graph(&store), store)
    }

    fn ids(results: &[ScoredMovie]) -> Vec<MovieId> {
        results.iter().map(|r| r.movie.id).collect()
    }

    #[test]
    fn test_weighted_example() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "A", "Sci-Fi", 8.7, "X"),
            Movie::new(2, "B", "Sci-Fi", 8.8, "X"),
            Movie::new(3, "C", "Drama", 5.0, "Y"),
        ]);

        let results = recommend(&graph, &store, 1, Weights::new(5, 3, 7), 20);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].movie.id, 2);
        assert_eq!(results[0].score, 15);
        assert_eq!(results[0].matched_kinds, SimilarityKind::ALL.to_vec());
    }

    #[test]
    fn test_all_zero_weights_yield_nothing() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "A", "Sci-Fi", 8.7, "X"),
            Movie::new(2, "B", "Sci-Fi", 8.8, "X"),
            Movie::new(3, "C", "Sci-Fi", 8.5, "X"),
        ]);

        for base in [1, 2, 3] {
            assert!(recommend(&graph, &store, base, Weights::default(), 20).is_empty());
        }
    }

    #[test]
    fn test_zero_weight_kind_is_ignored() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "A", "Horror", 6.0, "P"),
            Movie::new(2, "B", "Horror", 2.0, "Q"),
            Movie::new(3, "C", "Western", 6.2, "R"),
        ]);

        let results = recommend(&graph, &store, 1, Weights::new(0, 4, 0), 20);

        assert_eq!(ids(&results), vec![3]);
        assert_eq!(results[0].score, 4);
        assert_eq!(results[0].matched_kinds, vec![SimilarityKind::Rating]);
    }

    #[test]
    fn test_sorted_by_score_then_rating_then_id() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "Base", "Noir", 5.0, "Dir"),
            // genre + director
            Movie::new(2, "Two", "Noir", 9.9, "Dir"),
            // genre only, higher rating
            Movie::new(3, "Three", "Noir", 8.0, "Other"),
            // genre only, same rating as 3, larger id
            Movie::new(5, "Five", "Noir", 8.0, "Another"),
            // genre only, same rating as 3, smaller id than 5
            Movie::new(4, "Four", "Noir", 8.0, "Else"),
            // genre only, lower rating
            Movie::new(6, "Six", "Noir", 7.0, "Nobody"),
        ]);

        let results = recommend(&graph, &store, 1, Weights::new(2, 0, 3), 20);

        assert_eq!(ids(&results), vec![2, 3, 4, 5, 6]);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].movie.rating >= pair[1].movie.rating);
            }
        }
    }

    #[test]
    fn test_limit_returns_top_ranked() {
        let (graph, store) = catalog(vec![
            Movie::new(10, "Base", "Drama", 7.0, "A"),
            Movie::new(11, "N1", "Drama", 1.0, "B"),
            Movie::new(12, "N2", "Drama", 2.0, "C"),
            Movie::new(13, "N3", "Drama", 3.0, "D"),
            Movie::new(14, "N4", "Drama", 7.2, "A"),
            Movie::new(15, "N5", "Drama", 4.0, "E"),
        ]);

        let results = recommend(&graph, &store, 10, Weights::new(1, 1, 1), 1);

        assert_eq!(ids(&results), vec![14]);
        assert_eq!(results[0].score, 3);
    }

    #[test]
    fn test_base_never_returned() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "A", "Drama", 7.0, "X"),
            Movie::new(2, "B", "Drama", 7.0, "X"),
            Movie::new(3, "C", "Drama", 7.0, "X"),
        ]);

        for base in [1, 2, 3] {
            let results = recommend(&graph, &store, base, Weights::new(10, 10, 10), 20);
            assert_eq!(results.len(), 2);
            assert!(results.iter().all(|r| r.movie.id != base));
            assert!(results.iter().all(|r| r.score == 30));
        }
    }

    #[test]
    fn test_unknown_or_isolated_base_is_empty() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "A", "Drama", 1.0, "X"),
            Movie::new(2, "B", "Comedy", 9.0, "Y"),
        ]);

        assert!(recommend(&graph, &store, 1, Weights::new(5, 5, 5), 20).is_empty());
        assert!(recommend(&graph, &store, 404, Weights::new(5, 5, 5), 20).is_empty());
    }

    #[test]
    fn test_oversized_weights_saturate() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "A", "Drama", 7.0, "X"),
            Movie::new(2, "B", "Drama", 7.0, "Y"),
        ]);

        let results = recommend(&graph, &store, 1, Weights::new(u32::MAX, u32::MAX, 0), 5);

        assert_eq!(ids(&results), vec![2]);
        assert_eq!(results[0].score, u32::MAX);
    }

    #[test]
    fn test_unresolvable_candidate_dropped() {
        let store = load_catalog(vec![Movie::new(1, "A", "Drama", 7.0, "X")], 10).unwrap();
        let mut graph = SimilarityGraph::new();
        graph.add_edge(1, 99, SimilarityKind::Genre);

        assert!(recommend(&graph, &store, 1, Weights::new(5, 5, 5), 20).is_empty());
    }

    #[test]
    fn test_concurrent_queries_share_snapshot() {
        let (graph, store) = catalog(vec![
            Movie::new(1, "A", "Sci-Fi", 8.7, "X"),
            Movie::new(2, "B", "Sci-Fi", 8.8, "X"),
            Movie::new(3, "C", "Sci-Fi", 4.0, "Y"),
        ]);
        let expected = recommend(&graph, &store, 1, Weights::new(5, 3, 7), 20);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| recommend(&graph, &store, 1, Weights::new(5, 3, 7), 20)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
