//! Shared application state

use std::sync::Arc;
use strata_core::Store;

/// Shared state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one store behind this server
    pub store: Arc<Store>,
}

impl AppState {
    /// Create application state over an opened store.
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}
