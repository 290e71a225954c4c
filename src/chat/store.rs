//! In-memory session store
//!
//! Sessions live only for the lifetime of the process. The store keeps them
//! newest-first, which is also the order the sidebar shows them in.

use crate::chat::session::{Session, SessionId};

/// Ordered collection of sessions, most recently created first
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session at the head of the list and returns its id
    pub fn prepend(&mut self, session: Session) -> SessionId {
        let id = session.id().clone();
        self.sessions.insert(0, session);
        id
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.get(id).is_some()
    }

    /// Looks up a session by its zero-based position in sidebar order
    pub fn get_by_index(&self, index: usize) -> Option<&Session> {
        self.sessions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut store = SessionStore::new();
        let first = store.prepend(Session::new());
        let second = store.prepend(Session::new());

        let order: Vec<&SessionId> = store.iter().map(|s| s.id()).collect();
        assert_eq!(order, vec![&second, &first]);
        assert_eq!(store.get_by_index(0).map(|s| s.id()), Some(&second));
    }

    #[test]
    fn test_lookup_by_id() {
        let mut store = SessionStore::new();
        let id = store.prepend(Session::new());
        assert!(store.contains(&id));
        assert!(!store.contains(&SessionId::from("missing")));

        store
            .get_mut(&id)
            .unwrap()
            .push_assistant_message("hello");
        assert_eq!(store.get(&id).unwrap().messages().len(), 1);
    }

    #[test]
    fn test_empty_store() {
        let store = SessionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get_by_index(0).is_none());
    }
}
