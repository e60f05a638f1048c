use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Movie, MovieId, ScoredMovie, Weights},
};

fn default_weight() -> i64 {
    5
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Base movie by id; takes precedence over `movie_name`
    pub movie_id: Option<MovieId>,
    pub movie_name: Option<String>,
    #[serde(default = "default_weight")]
    pub genre_weight: i64,
    #[serde(default = "default_weight")]
    pub rating_weight: i64,
    #[serde(default = "default_weight")]
    pub director_weight: i64,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub base_movie: Movie,
    pub recommendations: Vec<ScoredMovie>,
    pub weights: Weights,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    // Reject weights outside 0..=10 before touching the catalog
    let weights = Weights::validated(
        request.genre_weight,
        request.rating_weight,
        request.director_weight,
    )?;

    let config = state.config();
    // Fall back to the configured default limit, capped by the configured maximum
    let limit = request.limit.unwrap_or(config.default_recommendation_limit);
    if limit == 0 || limit > config.max_recommendation_limit {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}",
            config.max_recommendation_limit
        )));
    }

    // One snapshot serves the whole request
    let catalog = state.catalog().await;

    // An explicit id takes precedence over a name lookup
    let base_movie = match (request.movie_id, request.movie_name.as_deref()) {
        (Some(id), _) => catalog.find_by_id(id)?,
        (None, Some(name)) => catalog.resolve_title(name)?,
        (None, None) => {
            return Err(AppError::InvalidInput(
                "Provide either movie_id or movie_name".to_string(),
            ))
        }
    };

    let recommendations = catalog.recommend(base_movie.id, weights, limit)?;

    tracing::info!(
        request_id = %request_id,
        base_id = base_movie.id,
        genre_weight = weights.genre,
        rating_weight = weights.rating,
        director_weight = weights.director,
        results = recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(RecommendationResponse {
        base_movie: base_movie.clone(),
        recommendations,
        weights,
    }))
}
