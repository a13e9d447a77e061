use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use stocklist_core::SessionId;

use crate::app::errors;
use crate::context::SessionContext;
use crate::sessions::SessionStore;

/// Header carrying the caller's session id.
pub const SESSION_HEADER: &str = "x-session-id";

/// Resolve the session named by `X-Session-Id` and attach it to the request.
pub async fn session_middleware(
    State(sessions): State<Arc<dyn SessionStore>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let session_id = extract_session_id(req.headers())?;

    let session = sessions.get(session_id).ok_or_else(|| {
        errors::json_error(StatusCode::NOT_FOUND, "session_not_found", "session not found")
    })?;

    req.extensions_mut().insert(SessionContext::new(session));

    Ok(next.run(req).await)
}

fn extract_session_id(headers: &HeaderMap) -> Result<SessionId, Response> {
    let invalid = |msg: &str| errors::json_error(StatusCode::BAD_REQUEST, "invalid_session", msg);

    let header = headers
        .get(SESSION_HEADER)
        .ok_or_else(|| invalid("missing X-Session-Id header"))?;

    let header = header
        .to_str()
        .map_err(|_| invalid("X-Session-Id must be ASCII"))?;

    header.parse().map_err(|e: stocklist_core::DomainError| invalid(&e.to_string()))
}
