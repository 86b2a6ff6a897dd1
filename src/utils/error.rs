use crate::dto::response::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

pub const MISSING_GENERATE_FIELDS: &str = "Missing required fields";
pub const MISSING_EDIT_FIELDS: &str = "Missing baseImage or editPrompt";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MockupError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    UpstreamCallFailed(String),
    #[error("Failed to generate images from the model.")]
    GenerationFailed,
    #[error("Mockup generation failed to produce enough images (got {produced}, expected {expected}).")]
    InsufficientResults { produced: usize, expected: usize },
    #[error("No image was generated in the edit response.")]
    NoImageProduced,
}

impl MockupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MockupError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MockupError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        error!("Error occurred ({}): {}", status, message);
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<JsonRejection> for MockupError {
    fn from(rejection: JsonRejection) -> Self {
        MockupError::Validation(rejection.body_text())
    }
}

pub fn upstream_error(message: &str, error: impl std::fmt::Display) -> MockupError {
    MockupError::UpstreamCallFailed(format!("{}: {}", message, error))
}
