//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`         - Health check: views/controllers/models layout (public)
//! - `/static/*`           - Static assets from `<base>/public`
//! - `<BASE_URI>/*`        - Front controller: everything dispatches
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{any, get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::handlers::{front_controller, health_handler};
use crate::middleware;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// The front controller is mounted under `base_uri` (merged at the root when
/// the base URI is `/`); every path beneath it, matched or not, flows
/// through the dispatcher.
pub fn app_router(state: AppState, base_uri: &str) -> NormalizePath<Router> {
    let public_dir = state.paths.public_dir();

    // The front controller is method-agnostic: the base URI itself and
    // every path beneath it dispatch regardless of HTTP method.
    let front = Router::new()
        .route("/", any(front_controller))
        .fallback(front_controller);

    let mount = base_uri.trim_end_matches('/');
    let router = if mount.is_empty() {
        Router::new().merge(front)
    } else {
        Router::new().nest(mount, front)
    };

    let router = router
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(public_dir))
        .with_state(state)
        .layer(middleware::trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
