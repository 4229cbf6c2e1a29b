//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /all`          - List every stored mapping
//! - `GET    /`             - Resolve a mapping by short code or long URL (JSON body)
//! - `POST   /`             - Create a shortened URL
//! - `DELETE /{short_url}`  - Delete a mapping (idempotent)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::routing::{delete, get};
use axum::Router;

use crate::api::handlers::{
    delete_url_handler, list_urls_handler, resolve_url_handler, shorten_url_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/all", get(list_urls_handler))
        .route("/", get(resolve_url_handler).post(shorten_url_handler))
        .route("/{short_url}", delete(delete_url_handler))
        .with_state(state)
        .layer(tracing::layer())
}
