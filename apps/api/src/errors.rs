use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::validation::MissingFields;
use crate::session::avatar::AvatarError;
use crate::views::ViewError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ViewError> for AppError {
    fn from(err: ViewError) -> Self {
        match err {
            ViewError::InvalidFilter(_) => AppError::InvalidFilter(err.to_string()),
            ViewError::UnknownPage(_) => AppError::NotFound(err.to_string()),
        }
    }
}

impl From<AvatarError> for AppError {
    fn from(err: AvatarError) -> Self {
        match err {
            AvatarError::UnsupportedImage { .. } => AppError::UnsupportedImage(err.to_string()),
            AvatarError::Empty | AvatarError::TooLarge { .. } => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

impl From<MissingFields> for AppError {
    fn from(err: MissingFields) -> Self {
        AppError::MissingFields(err.fields)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidFilter(msg) => {
                tracing::warn!("Rejected filter: {msg}");
                (StatusCode::BAD_REQUEST, "INVALID_FILTER", msg.clone())
            }
            AppError::MissingFields(fields) => {
                let body = Json(json!({
                    "error": {
                        "code": "MISSING_FIELDS",
                        "message": crate::contact::validation::MISSING_FIELDS_WARNING,
                        "fields": fields,
                    }
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::UnsupportedImage(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_IMAGE",
                msg.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
