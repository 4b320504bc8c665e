//! In-memory session storage.

use dashmap::DashMap;

use sparky_core::chat::store::SessionStore;
use sparky_types::chat::{SessionId, Turn};
use sparky_types::error::StoreError;

/// Process-local session store backed by a concurrent map.
///
/// History lives only as long as the process and nothing is evicted. The
/// map shards internally, so turns for different sessions never contend on
/// one lock.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, Vec<Turn>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, id: Option<SessionId>) -> Result<SessionId, StoreError> {
        let id = id.unwrap_or_else(SessionId::generate);
        self.sessions.entry(id.clone()).or_default();
        Ok(id)
    }

    async fn turns(&self, id: &SessionId) -> Result<Vec<Turn>, StoreError> {
        Ok(self
            .sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn append(&self, id: &SessionId, turn: Turn) -> Result<(), StoreError> {
        self.sessions.entry(id.clone()).or_default().push(turn);
        Ok(())
    }
}
