use axum::{extract::State, Extension, Json};

use super::AppState;
use crate::{error::AppResult, middleware::RequestId, models::CatalogStats};

/// Statistics of the catalog currently served
pub async fn stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog().await.stats())
}

/// Reloads the catalog from its source and swaps it in
pub async fn reload(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<CatalogStats>> {
    tracing::info!(request_id = %request_id, "Catalog reload requested");

    let catalog = state.reload().await.inspect_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Catalog reload failed");
    })?;

    Ok(Json(catalog.stats()))
}
