use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::MovieId;
use crate::error::{AppError, AppResult};

/// Highest weight a caller may assign to a similarity kind
pub const MAX_WEIGHT: i64 = 10;

/// Dimension along which two movies are considered similar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityKind {
    /// Same genre, ignoring case
    Genre,
    /// Ratings at most 0.5 apart
    Rating,
    /// Same director, ignoring case
    Director,
}

impl SimilarityKind {
    /// All kinds in their canonical order
    pub const ALL: [SimilarityKind; 3] = [
        SimilarityKind::Genre,
        SimilarityKind::Rating,
        SimilarityKind::Director,
    ];
}

impl Display for SimilarityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimilarityKind::Genre => write!(f, "genre"),
            SimilarityKind::Rating => write!(f, "rating"),
            SimilarityKind::Director => write!(f, "director"),
        }
    }
}

/// Outgoing edge of a movie in the similarity graph
///
/// The source is the graph node the edge is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SimilarityEdge {
    pub target: MovieId,
    pub kind: SimilarityKind,
}

/// Per-kind weights applied when scoring candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Weights {
    pub genre: u32,
    pub rating: u32,
    pub director: u32,
}

impl Weights {
    /// Creates weights without range checks
    pub fn new(genre: u32, rating: u32, director: u32) -> Self {
        Self {
            genre,
            rating,
            director,
        }
    }

    /// Validates raw caller input, rejecting anything outside `0..=MAX_WEIGHT`
    pub fn validated(genre: i64, rating: i64, director: i64) -> AppResult<Self> {
        Ok(Self {
            genre: check_weight(SimilarityKind::Genre, genre)?,
            rating: check_weight(SimilarityKind::Rating, rating)?,
            director: check_weight(SimilarityKind::Director, director)?,
        })
    }

    /// Weight assigned to a similarity kind
    pub fn for_kind(&self, kind: SimilarityKind) -> u32 {
        match kind {
            SimilarityKind::Genre => self.genre,
            SimilarityKind::Rating => self.rating,
            SimilarityKind::Director => self.director,
        }
    }
}

fn check_weight(kind: SimilarityKind, value: i64) -> AppResult<u32> {
    if (0..=MAX_WEIGHT).contains(&value) {
        Ok(value as u32)
    } else {
        Err(AppError::InvalidWeight { kind, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_accepts_bounds() {
        let weights = Weights::validated(0, 10, 5).unwrap();
        assert_eq!(weights, Weights::new(0, 10, 5));
    }

    #[test]
    fn test_validated_rejects_out_of_range() {
        let err = Weights::validated(11, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidWeight {
                kind: SimilarityKind::Genre,
                value: 11
            }
        ));

        let err = Weights::validated(0, 0, -1).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidWeight {
                kind: SimilarityKind::Director,
                value: -1
            }
        ));
    }

    #[test]
    fn test_for_kind() {
        let weights = Weights::new(5, 3, 7);
        assert_eq!(weights.for_kind(SimilarityKind::Genre), 5);
        assert_eq!(weights.for_kind(SimilarityKind::Rating), 3);
        assert_eq!(weights.for_kind(SimilarityKind::Director), 7);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_string(&SimilarityKind::Genre).unwrap(), "\"genre\"");
        assert_eq!(serde_json::to_string(&SimilarityKind::Director).unwrap(), "\"director\"");
        assert_eq!(SimilarityKind::Rating.to_string(), "rating");
    }
}
