//! API error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use vault_core::{StoreError, VaultError};

const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Errors returned by request handlers
///
/// Only the fixed messages below reach the client. Internal detail is
/// logged server-side and replaced with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// `{success: false, message}` body shared by every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::BadRequest(message) | Self::NotFound(message) => *message,
            Self::Internal(detail) => {
                error!("Request failed: {}", detail);
                INTERNAL_MESSAGE
            }
        };

        let body = ErrorBody {
            success: false,
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<VaultError> for ApiError {
    fn from(err: VaultError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}
