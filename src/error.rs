// src/error.rs
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorBody;
use crate::services::completion::CompletionError;

pub const MISSING_MESSAGE: &str = "Missing 'message' in request body.";
pub const INTERNAL_ERROR: &str = "Internal server error.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing 'message' in request body")]
    MissingField,

    #[error("upstream completion failed: {0}")]
    UpstreamFailure(#[from] CompletionError),

    /// The body could not be read at all, e.g. it exceeds the size limit.
    #[error("unreadable request body: {0}")]
    Body(#[from] BytesRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField => StatusCode::BAD_REQUEST,
            AppError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Body(rejection) => rejection.status(),
        }
    }
}

// The upstream cause is logged here and never leaves the process.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MissingField => MISSING_MESSAGE.to_string(),
            AppError::UpstreamFailure(cause) => {
                error!(error = %cause, "talk request failed");
                INTERNAL_ERROR.to_string()
            }
            AppError::Body(rejection) => rejection.body_text(),
        };

        let body = ErrorBody { error: message };
        (self.status_code(), Json(body)).into_response()
    }
}
