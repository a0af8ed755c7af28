//! Keyed session store for list collections.
//!
//! # Design
//! Replaces ambient per-request session state with an explicit container
//! passed into every operation: one `Vec<TodoList>` per session key,
//! created empty on first access and owned for the session's lifetime.
//! The map only grows until `remove_session` is called, so a long-lived
//! host must end sessions explicitly (the server exposes this as session
//! teardown). Sessions are fully independent. The store does no locking — callers
//! that share it across tasks wrap it in their own synchronization (the
//! server uses `Arc<RwLock<SessionStore>>`), which also gives each request
//! exclusive access to the session data it touches.

use std::collections::HashMap;

use uuid::Uuid;

use crate::types::TodoList;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Vec<TodoList>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's list collection, created empty on first access.
    pub fn lists(&mut self, session: Uuid) -> &mut Vec<TodoList> {
        self.sessions.entry(session).or_default()
    }

    /// Read-only view that does not create an empty session as a side effect.
    pub fn get(&self, session: Uuid) -> Option<&[TodoList]> {
        self.sessions.get(&session).map(Vec::as_slice)
    }

    /// Drop a session's state entirely, returning it if it existed.
    pub fn remove_session(&mut self, session: Uuid) -> Option<Vec<TodoList>> {
        self.sessions.remove(&session)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::create_list;

    #[test]
    fn first_access_creates_empty_collection() {
        let mut store = SessionStore::new();
        let session = Uuid::new_v4();
        assert!(store.lists(session).is_empty());
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn get_does_not_create_sessions() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).is_none());
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn sessions_are_independent() {
        let mut store = SessionStore::new();
        let alpha = Uuid::new_v4();
        let beta = Uuid::new_v4();

        create_list(store.lists(alpha), "Groceries").unwrap();
        assert!(store.lists(beta).is_empty());
        // Same name in another session is not a duplicate.
        create_list(store.lists(beta), "Groceries").unwrap();
        assert_eq!(store.lists(alpha).len(), 1);
        assert_eq!(store.lists(beta).len(), 1);
    }

    #[test]
    fn mutations_persist_across_lookups() {
        let mut store = SessionStore::new();
        let session = Uuid::new_v4();
        create_list(store.lists(session), "Groceries").unwrap();
        assert_eq!(store.lists(session)[0].name, "Groceries");
    }

    #[test]
    fn remove_session_returns_its_state() {
        let mut store = SessionStore::new();
        let session = Uuid::new_v4();
        create_list(store.lists(session), "Groceries").unwrap();

        let removed = store.remove_session(session).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(store.get(session).is_none());
        assert!(store.remove_session(session).is_none());
    }
}
