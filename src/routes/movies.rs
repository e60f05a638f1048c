use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::{
    error::AppResult,
    models::{Movie, MovieId},
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    name: String,
}

/// Autocomplete search by title
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Movie>> {
    let catalog = state.catalog().await;
    let movies = catalog
        .search(&params.name, state.config().search_result_limit)
        .into_iter()
        .cloned()
        .collect();
    Json(movies)
}

/// All movies in catalog order
pub async fn list(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let catalog = state.catalog().await;
    Json(catalog.store().iter().cloned().collect())
}

/// Single movie by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let catalog = state.catalog().await;
    let movie = catalog.find_by_id(id)?.clone();
    Ok(Json(movie))
}
