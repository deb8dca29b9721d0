//! Application state for the rental engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::RentalEngine;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the assembled rental engine.
#[derive(Clone)]
pub struct AppState {
    /// The assembled rental engine.
    engine: Arc<RentalEngine>,
}

impl AppState {
    /// Creates a new application state with the given engine.
    pub fn new(engine: RentalEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the rental engine.
    pub fn engine(&self) -> &RentalEngine {
        &self.engine
    }
}
