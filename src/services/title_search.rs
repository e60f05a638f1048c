use super::store::MovieStore;
use crate::{
    error::{AppError, AppResult},
    models::{fold_label, labels_match, Movie},
};

/// Autocomplete search over titles
///
/// Case-insensitive substring match, in store order, capped at `limit`.
/// A blank query matches nothing.
pub fn search_titles<'a>(store: &'a MovieStore, query: &str, limit: usize) -> Vec<&'a Movie> {
    let needle = fold_label(query.trim());
    if needle.is_empty() {
        return Vec::new();
    }

    store
        .iter()
        .filter(|movie| fold_label(&movie.title).contains(&needle))
        .take(limit)
        .collect()
}

/// Resolves a movie from a user-supplied name
///
/// An exact case-insensitive title match wins; otherwise the first title
/// containing the name is used.
pub fn resolve_title<'a>(store: &'a MovieStore, name: &str) -> AppResult<&'a Movie> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("Movie name must not be empty".to_string()));
    }

    store
        .iter()
        .find(|movie| labels_match(&movie.title, name))
        .or_else(|| search_titles(store, name, 1).into_iter().next())
        .ok_or_else(|| AppError::NotFound(format!("Movie \"{}\" not found", name)))
}
