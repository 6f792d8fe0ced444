//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY /{key}` - Key dispatch: redirect, static page, or `500`
//!
//! Every other path (`/`, `/a/b`) falls through to the default `404`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (`/github/` → `/github`)
//!
//! The trailing-slash trim is deliberate. A strict `/{key}` route would
//! answer `404` for `/github/`; here it redirects like `/github`.

use crate::api::handlers::dispatch_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::any;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Dispatch routes with tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{key}", any(dispatch_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
