use crate::completion::CompletionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Everything that can end a `/process` request early
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("invalid content type: must be an image")]
    InvalidContentType,

    #[error("error reading image: {0}")]
    ReadBody(#[source] axum::Error),

    #[error("error processing image: {0}")]
    Completion(#[from] CompletionError),
}

impl ProcessError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProcessError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProcessError::InvalidContentType | ProcessError::ReadBody(_) => StatusCode::BAD_REQUEST,
            ProcessError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body returned to the caller. Never carries the underlying cause.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProcessError::MethodNotAllowed => "method not allowed",
            ProcessError::InvalidContentType => "invalid content type: must be an image",
            ProcessError::ReadBody(_) => "error reading image, check logs for more details",
            ProcessError::Completion(_) => "error processing image, check logs for more details",
        }
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        match &self {
            ProcessError::ReadBody(e) => tracing::error!("Error reading image: {:?}", e),
            ProcessError::Completion(e) => tracing::error!("Error processing image: {:?}", e),
            _ => tracing::warn!("Rejected request: {}", self),
        }

        (self.status(), self.public_message()).into_response()
    }
}
