use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::error::Error;

/// Failure taxonomy at the HTTP boundary. Every failure in validation,
/// provider invocation, or configuration maps to exactly one of these,
/// and the caller only ever sees `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Unknown {kind}: '{value}'")]
    UnknownSelector {
        kind: &'static str,
        value: String,
    },

    #[error("AI service not configured")]
    NotConfigured,

    #[error("An error occurred with the AI service.")]
    Provider(#[from] Error),

    #[error("Empty response from model.")]
    EmptyResponse,
}

impl ApiError {
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::UnknownSelector { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::EmptyResponse => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Provider detail stays in the server logs; the genericized
        // Display message is all that crosses the boundary.
        match &self {
            ApiError::Provider(source) => error!("AI provider call failed: {}", source),
            ApiError::EmptyResponse => warn!("Provider returned empty text"),
            ApiError::Validation { field, message } => {
                warn!(field = %field, "Request validation failed: {}", message)
            }
            ApiError::UnknownSelector { kind, value } => {
                warn!("Unknown {} selector: '{}'", kind, value)
            }
            ApiError::NotConfigured => warn!("Request rejected: AI service not configured"),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            field: "body",
            message: rejection.body_text(),
        }
    }
}

/// `axum::Json` with rejections mapped into the uniform error envelope,
/// so a malformed body is a 400 `{"error": ...}` like every other
/// validation failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
