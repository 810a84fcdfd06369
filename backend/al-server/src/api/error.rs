//! REST API error types
//!
//! Every failure is translated at this boundary into the flat
//! `{"error": ..., "details"?: ..., "needs_verification"?: true}` JSON body
//! the form client consumes. The `needs_verification` flag is structured
//! data from the gateway - clients never have to pattern-match message text
//! to detect a second-factor challenge.

use al_db::DbError;
use al_gateway::GatewayError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_verification: Option<bool>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed client input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// The provider call failed or returned an unusable response (500)
    #[error("Gateway failure: {details} {location}")]
    Gateway {
        details: String,
        needs_verification: bool,
        location: ErrorLocation,
    },

    /// Internal server error (500), detail kept generic
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse {
                    error: message,
                    details: None,
                    needs_verification: None,
                },
            ),
            ApiError::Gateway {
                details,
                needs_verification,
                ..
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorResponse {
                    error: "Failed to connect LinkedIn account".to_string(),
                    details: Some(details),
                    needs_verification: needs_verification.then_some(true),
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorResponse {
                    error: message,
                    details: None,
                    needs_verification: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert gateway errors to API errors, preserving the structured
/// verification flag and the provider-supplied detail.
impl From<GatewayError> for ApiError {
    #[track_caller]
    fn from(e: GatewayError) -> Self {
        ApiError::Gateway {
            details: e.detail(),
            needs_verification: e.needs_verification(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose storage internals to clients
        log::error!("Database error: {}", e);

        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
