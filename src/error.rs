use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::{MovieId, SimilarityKind};

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{kind}_weight must be between 0 and 10, got {value}")]
    InvalidWeight { kind: SimilarityKind, value: i64 },

    #[error("Duplicate movie id: {0}")]
    DuplicateId(MovieId),

    #[error("Catalog holds {count} movies, exceeding the limit of {limit}")]
    CapacityExceeded { count: usize, limit: usize },

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::InvalidWeight { .. } => StatusCode::BAD_REQUEST,
            AppError::DuplicateId(_) => StatusCode::CONFLICT,
            AppError::CapacityExceeded { .. } | AppError::EmptyCatalog => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Csv(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::NotFound(msg) | AppError::InvalidInput(msg) => msg,
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
