use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("Failed to save inquiry: {0}")]
    Storage(anyhow::Error),
    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingField(field) => {
                (StatusCode::BAD_REQUEST, format!("{} is required", field))
            }
            ApiError::InvalidEmail => {
                (StatusCode::BAD_REQUEST, "invalid email address".to_string())
            }
            ApiError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save your inquiry. Please try again.".to_string(),
            ),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load catalog data. Please try again.".to_string(),
            ),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
