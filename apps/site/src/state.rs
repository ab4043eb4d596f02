use std::sync::Arc;

use crate::composer::PageComposer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup, so handlers share it without locking.
    pub composer: Arc<PageComposer>,
}
