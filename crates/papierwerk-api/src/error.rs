// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Error types for the Papierwerk API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use papierwerk_core::PapierwerkError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("document operation failed: {0}")]
    Operation(#[from] PapierwerkError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(name) => {
                (StatusCode::NOT_FOUND, format!("file not found: {}", name))
            }
            // Malformed request fields surface as 400s even when detected
            // deep in the engine.
            ApiError::Operation(PapierwerkError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            // Decode/encode faults report their message verbatim.
            ApiError::Operation(err) => {
                tracing::error!("document operation failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Internal(err) => {
                tracing::error!("internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
