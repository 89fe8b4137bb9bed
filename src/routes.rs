//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `/tag/{slug}`, `/{year}/{month}/{day}/{slug}` - Blog pages
//! - `POST /{id}/comment`, `GET|POST /{id}/share`             - Blog forms
//! - `GET  /health`                                          - Health check
//! - `/api/*`                                                - JSON API
//! - `/static/*`                                             - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on form routes
//! - **Path normalization** - Trailing slashes are trimmed before routing

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the production router: all routes, rate limiting, tracing and
/// trailing-slash normalization.
///
/// Rate limiting keys on the peer address, so the router must be served with
/// connect info (see [`crate::server::run`]).
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let web_router = web::routes::page_routes()
        .layer(rate_limit::layer())
        .merge(web::routes::form_routes().layer(rate_limit::secure_layer()));

    let api_router = api::routes::read_routes()
        .layer(rate_limit::layer())
        .merge(api::routes::form_routes().layer(rate_limit::secure_layer()));

    let router = Router::new()
        .merge(web_router)
        .nest("/api", api_router)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the router without rate limiting or path normalization.
///
/// Used by tests, which send requests without a peer address.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .merge(web::routes::form_routes())
        .nest(
            "/api",
            api::routes::read_routes().merge(api::routes::form_routes()),
        )
        .route("/health", get(health_handler))
        .with_state(state)
}
