//! Axum router construction for the governance API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the governance server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /api/agents/connect` -- connect or register an agent
/// - `GET /api/agents/{name}/nations` -- nations founded by an agent
/// - `POST /api/nations` / `GET /api/nations` -- found / list nations
/// - `GET /api/nations/{slug}` -- single nation
/// - `GET|PUT /api/nations/{slug}/policy` -- policy read / upsert
/// - `GET|POST /api/nations/{slug}/candidates` -- ranked list / nominate
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/agents/connect", post(handlers::connect_agent))
        .route(
            "/api/agents/{name}/nations",
            get(handlers::list_founder_nations),
        )
        .route(
            "/api/nations",
            post(handlers::create_nation).get(handlers::list_recent_nations),
        )
        .route("/api/nations/{slug}", get(handlers::get_nation))
        .route(
            "/api/nations/{slug}/policy",
            get(handlers::get_policy).put(handlers::save_policy),
        )
        .route(
            "/api/nations/{slug}/candidates",
            get(handlers::list_candidates).post(handlers::nominate_candidate),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
