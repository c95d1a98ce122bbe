// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::{ChatResponse, ErrorResponse};

pub const MISSING_API_KEY_WARNING: &str =
    "⚠️ ไม่มี API Key (GEMINI_API_KEY) - ตั้งค่าใน environment variable";

#[derive(Debug, Error)]
pub enum AppError {
    /// No provider key configured. Reported to the caller as a warning, not an error.
    #[error("provider API key is not configured")]
    MissingApiKey,

    #[error("invalid request body: {0}")]
    BadBody(#[source] serde_json::Error),

    /// Provider answered with a non-2xx status; `body` is relayed untouched.
    #[error("provider returned {status}")]
    Upstream { status: StatusCode, body: String },

    /// Built with the request URL stripped, since the URL carries the key.
    #[error(transparent)]
    Transport(reqwest::Error),

    #[error("could not decode provider response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::MissingApiKey => (
                status,
                Json(ChatResponse { content: MISSING_API_KEY_WARNING.to_string() }),
            )
                .into_response(),
            AppError::Upstream { body, .. } => {
                (status, Json(ErrorResponse { error: body })).into_response()
            }
            other => (status, Json(ErrorResponse { error: other.to_string() })).into_response(),
        }
    }
}
