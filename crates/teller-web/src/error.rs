//! HTTP error mapping for the JSON API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors a handler can surface to the client.
///
/// The front-end matches on the body strings, so rejected operations carry
/// the exact message to show while the status code stays coarse.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Account not found")]
    AccountNotFound,

    /// Domain rejection with the message the front-end displays.
    #[error("{0}")]
    Rejected(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::AccountNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Account not found" }),
            ),
            ApiError::Rejected(message) => {
                (StatusCode::BAD_REQUEST, json!({ "message": message }))
            }
            ApiError::Internal(err) => {
                tracing::error!("unhandled error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
