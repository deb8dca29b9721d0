//! Response types for the rental engine API.
//!
//! This module defines the success and error response structures for
//! the HTTP API and the mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ConfigError, EngineError, ValidationError};
use crate::models::RentalAgreement;

/// Response body for a successful `/checkout` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Unique identifier for this agreement.
    pub agreement_id: Uuid,
    /// When the agreement was produced.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the agreement.
    pub engine_version: String,
    /// The full rental agreement.
    pub agreement: RentalAgreement,
    /// The agreement rendered as labeled display lines, dates in the
    /// configured format.
    pub display: Vec<String>,
}

impl CheckoutResponse {
    /// Wraps a finished agreement for the wire.
    pub fn new(agreement: RentalAgreement, date_format: &str) -> Self {
        let display = agreement.display_lines(date_format);
        Self {
            agreement_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            agreement,
            display,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a tool not found error response.
    pub fn tool_not_found(code: &str) -> Self {
        Self::with_details(
            "TOOL_NOT_FOUND",
            format!("There is no tool with code: {}", code),
            format!("The tool code '{}' is not in the catalog", code),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation(ValidationError::UnknownToolCode { code }) => {
                ApiErrorResponse {
                    status: StatusCode::NOT_FOUND,
                    error: ApiError::tool_not_found(&code),
                }
            }
            EngineError::Validation(err @ ValidationError::InvalidCheckoutDate { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::new("INVALID_CHECKOUT_DATE", err.to_string()),
                }
            }
            EngineError::Validation(err @ ValidationError::InvalidRentalDuration { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::new("INVALID_RENTAL_DURATION", err.to_string()),
                }
            }
            EngineError::Validation(err @ ValidationError::InvalidDiscountPercent { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::new("INVALID_DISCOUNT_PERCENT", err.to_string()),
                }
            }
            EngineError::Config(ConfigError::NotFound { path }) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::Config(ConfigError::Parse { path, message }) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::Config(err) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", err.to_string()),
            },
        }
    }
}
