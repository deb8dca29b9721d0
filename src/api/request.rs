//! Request types for the rental engine API.
//!
//! This module defines the JSON request structure for the `/checkout`
//! endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/checkout` endpoint.
///
/// Mirrors the four values a clerk enters at the point of sale. The
/// checkout date is carried as a string and parsed with the configured
/// date format so that clients and the printed agreement agree on
/// formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The code of the tool to rent (e.g., "LADW").
    pub tool_code: String,
    /// The checkout date, in the configured date format.
    pub checkout_date: String,
    /// The number of days the tool is rented for.
    pub rental_days: i64,
    /// The whole-number discount percentage (0 through 100).
    pub discount_percent: i64,
}
