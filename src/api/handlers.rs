//! HTTP request handlers for the rental engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ValidationError;

use super::request::CheckoutRequest;
use super::response::{ApiError, ApiErrorResponse, CheckoutResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .with_state(state)
}

/// Handler for POST /checkout endpoint.
///
/// Accepts a checkout request and returns the finished rental agreement.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let engine = state.engine();
    let date_format = engine.settings().date_format.as_str();

    // Parse the checkout date with the configured format
    let checkout_date = match NaiveDate::parse_from_str(&request.checkout_date, date_format) {
        Ok(date) => date,
        Err(_) => {
            warn!(
                correlation_id = %correlation_id,
                input = %request.checkout_date,
                "Unparseable checkout date"
            );
            let api_error: ApiErrorResponse = crate::error::EngineError::from(
                ValidationError::InvalidCheckoutDate {
                    input: request.checkout_date.clone(),
                    format: date_format.to_string(),
                },
            )
            .into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Perform the checkout
    let start_time = Instant::now();
    match engine.checkout(
        &request.tool_code,
        checkout_date,
        request.rental_days,
        request.discount_percent,
    ) {
        Ok(agreement) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                tool_code = %agreement.tool.code,
                rental_days = agreement.rental_days,
                final_charge = %agreement.final_charge,
                duration_us = duration.as_micros(),
                "Checkout completed successfully"
            );
            let response = CheckoutResponse::new(agreement, date_format);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Checkout failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
