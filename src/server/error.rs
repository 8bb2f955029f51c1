//! Error-to-response mapping for the API.
//!
//! Three classes, per the service's error design: validation failures answer
//! 400 with a short message, upstream failures (email transport, directory
//! source) answer 500 with the detail string, and wrong verbs answer 405 via
//! axum's method routing. Nothing is retried or partially recovered.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    /// Missing/malformed request fields or an unclassifiable payload.
    BadRequest(String),
    /// Email transport failure; body carries `error` + `details`.
    SendFailed(String),
    /// Directory data-source failure; body carries `error`.
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::SendFailed(details) => {
                error!(details = %details, "email dispatch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to send email", "details": details })),
                )
                    .into_response()
            }
            ApiError::Upstream(detail) => {
                error!(detail = %detail, "directory fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": detail })),
                )
                    .into_response()
            }
        }
    }
}
