use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::SessionContext;
use crate::sessions::SessionStore;

pub async fn open_session(
    Extension(sessions): Extension<Arc<dyn SessionStore>>,
) -> axum::response::Response {
    let session = sessions.open();
    tracing::info!(session_id = %session.id(), "session opened");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "session_id": session.id(),
            "opened_at": session.opened_at(),
        })),
    )
        .into_response()
}

pub async fn get_session(Extension(ctx): Extension<SessionContext>) -> impl IntoResponse {
    let session = ctx.session();
    Json(serde_json::json!({
        "session_id": session.id(),
        "opened_at": session.opened_at(),
        "item_count": session.with_inventory(|inv| inv.len()),
    }))
}

pub async fn close_session(
    Extension(sessions): Extension<Arc<dyn SessionStore>>,
    Extension(ctx): Extension<SessionContext>,
) -> StatusCode {
    if sessions.close(ctx.session_id()) {
        tracing::info!(session_id = %ctx.session_id(), "session closed");
    }
    StatusCode::NO_CONTENT
}
