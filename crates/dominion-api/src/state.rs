//! Shared application state for the governance API server.
//!
//! [`AppState`] holds the `PostgreSQL` pool every handler reads and
//! writes through. Handlers are stateless beyond this: each request is an
//! independent round trip against the shared store, with no in-process
//! caches and no background tasks.

use dominion_db::PostgresPool;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the persistent store.
    pub db: PostgresPool,
}

impl AppState {
    /// Create application state over a connected pool.
    pub const fn new(db: PostgresPool) -> Self {
        Self { db }
    }
}
