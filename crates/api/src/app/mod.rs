//! HTTP API application wiring (Axum router).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and response mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::middleware;
use crate::sessions::SessionStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(sessions: Arc<dyn SessionStore>) -> Router {
    // Session-scoped routes: require a live `X-Session-Id`.
    let scoped = routes::router().layer(axum::middleware::from_fn_with_state(
        sessions.clone(),
        middleware::session_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/sessions", post(routes::sessions::open_session))
        .merge(scoped)
        .layer(Extension(sessions))
}
