//! HTTP route handlers.
//!
//! Two fixed routes. Anything else falls through to axum's defaults: 404 for
//! unknown paths and 405 for a known path with the wrong method.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router. Built once at startup and handed to the listener.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        // Outermost, so 404 and 405 responses are tagged too
        .layer(middleware::from_fn(request_id_layer))
}
