use axum::{
    routing::{delete, get},
    Router,
};

pub mod items;
pub mod sessions;
pub mod system;

/// Router for all session-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route(
            "/session",
            get(sessions::get_session).delete(sessions::close_session),
        )
        .route("/items", get(items::list_items).post(items::add_item))
        .route("/items/:id", delete(items::remove_item))
}
