use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced to API clients. Placement itself never fails; these cover
/// bad requests and lookups.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("at least one non-empty word is required")]
    NoWords,

    #[error("at most {max} words are allowed, got {got}")]
    TooManyWords { max: usize, got: usize },

    #[error("grid size {size} is outside the allowed range {min}..={max}")]
    InvalidGridSize { size: usize, min: usize, max: usize },

    #[error("puzzle {0} not found")]
    NotFound(Uuid),

    #[error("puzzle generation failed: {0}")]
    Generation(#[from] tokio::task::JoinError),
}

impl PuzzleError {
    pub fn status(&self) -> StatusCode {
        match self {
            PuzzleError::NoWords
            | PuzzleError::TooManyWords { .. }
            | PuzzleError::InvalidGridSize { .. } => StatusCode::BAD_REQUEST,
            PuzzleError::NotFound(_) => StatusCode::NOT_FOUND,
            PuzzleError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PuzzleError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PuzzleError::NoWords.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            PuzzleError::TooManyWords { max: 8, got: 9 }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PuzzleError::NotFound(Uuid::nil()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PuzzleError::InvalidGridSize { size: 2, min: 4, max: 40 }.to_string(),
            "grid size 2 is outside the allowed range 4..=40"
        );
    }
}
