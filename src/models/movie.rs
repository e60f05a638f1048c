use serde::{Deserialize, Serialize};

/// Externally assigned movie identifier
pub type MovieId = i64;

/// Maximum title length in characters
pub const MAX_TITLE_LEN: usize = 255;
/// Maximum genre length in characters
pub const MAX_GENRE_LEN: usize = 63;
/// Maximum director length in characters
pub const MAX_DIRECTOR_LEN: usize = 127;

/// Lowest accepted rating
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating
pub const MAX_RATING: f64 = 10.0;

/// A recommendable movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique identifier, immutable once loaded
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Genre label, compared case-insensitively
    pub genre: String,
    /// Rating between 0.0 and 10.0
    pub rating: f64,
    /// Director label, compared case-insensitively
    pub director: String,
}

impl Movie {
    /// Creates a new movie record
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        director: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            rating,
            director: director.into(),
        }
    }

    /// Truncates text fields to their bounds
    pub fn bounded(mut self) -> Self {
        truncate_chars(&mut self.title, MAX_TITLE_LEN);
        truncate_chars(&mut self.genre, MAX_GENRE_LEN);
        truncate_chars(&mut self.director, MAX_DIRECTOR_LEN);
        self
    }

    /// Whether the rating is a finite value inside the accepted range
    pub fn has_valid_rating(&self) -> bool {
        self.rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}

/// Case-folded form of a label, used wherever labels are compared
pub fn fold_label(label: &str) -> String {
    label.to_lowercase()
}

/// Whether two labels match after case folding
pub fn labels_match(a: &str, b: &str) -> bool {
    fold_label(a) == fold_label(b)
}

fn truncate_chars(value: &mut String, max_chars: usize) {
    if let Some((byte_idx, _)) = value.char_indices().nth(max_chars) {
        value.truncate(byte_idx);
    }
}
