//! Session registry: one independent inventory per user session.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use stocklist_core::SessionId;
use stocklist_inventory::Inventory;

/// A user session owning exactly one inventory.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    opened_at: DateTime<Utc>,
    inventory: Mutex<Inventory>,
}

impl Session {
    pub fn new(id: SessionId, opened_at: DateTime<Utc>) -> Self {
        Self {
            id,
            opened_at,
            inventory: Mutex::new(Inventory::new()),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Run `f` with exclusive access to this session's inventory.
    ///
    /// Every inventory mutation is a single push or retain, so a poisoned lock
    /// still guards a consistent list and is recovered.
    pub fn with_inventory<R>(&self, f: impl FnOnce(&mut Inventory) -> R) -> R {
        let mut guard = self.lock_inventory();
        f(&mut guard)
    }

    fn lock_inventory(&self) -> MutexGuard<'_, Inventory> {
        match self.inventory.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!(session_id = %self.id, "inventory lock poisoned; recovering");
                poisoned.into_inner()
            }
        }
    }
}

/// Session registry abstraction.
pub trait SessionStore: Send + Sync {
    /// Open a new session with an empty inventory.
    fn open(&self) -> Arc<Session>;
    fn get(&self, id: SessionId) -> Option<Arc<Session>>;
    /// Close a session and discard its inventory. Returns whether it existed.
    fn close(&self, id: SessionId) -> bool;
}

/// Process-lifetime session registry.
#[derive(Debug)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<SessionId, Arc<Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    // Entries are inserted or removed whole, so a poisoned map is still
    // consistent and is recovered.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<SessionId, Arc<Session>>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("session registry lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, Arc<Session>>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("session registry lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn open(&self) -> Arc<Session> {
        let session = Arc::new(Session::new(SessionId::new(), Utc::now()));
        self.write().insert(session.id(), session.clone());
        session
    }

    fn get(&self, id: SessionId) -> Option<Arc<Session>> {
        self.read().get(&id).cloned()
    }

    fn close(&self, id: SessionId) -> bool {
        self.write().remove(&id).is_some()
    }
}
