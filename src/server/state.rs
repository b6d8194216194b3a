//! Shared application state for the Axum server.

use std::sync::Arc;

use crate::translate::TranslationOrchestrator;

/// State shared by all request handlers.
///
/// The orchestrator only reads shared data, so handlers use it
/// concurrently without locking.
pub struct AppState {
    pub translator: TranslationOrchestrator,
}

impl AppState {
    pub fn new(translator: TranslationOrchestrator) -> Arc<Self> {
        Arc::new(Self { translator })
    }
}
