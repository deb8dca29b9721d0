//! HTTP API module for the rental engine.
//!
//! This module provides the REST API endpoint for checking out a tool
//! and producing a rental agreement.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequest;
pub use response::{ApiError, CheckoutResponse};
pub use state::AppState;
