use std::sync::Arc;

use stocklist_core::SessionId;

use crate::sessions::Session;

/// Session context for a request.
///
/// Inserted by the session middleware; present for all session-scoped routes.
#[derive(Debug, Clone)]
pub struct SessionContext {
    session: Arc<Session>,
}

impl SessionContext {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    pub fn session_id(&self) -> SessionId {
        self.session.id()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
