//! Bounded per-session state.
//!
//! Chat page views and browser sessions are both kept in memory only. To keep
//! memory bounded when many visitors come and go, the store tracks at most a
//! fixed number of sessions and evicts the least recently used.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

/// Default maximum number of sessions to track before LRU eviction.
const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Map from session id to shared session state with LRU eviction.
///
/// # Example
///
/// ```rust
/// use chat_core::{ChatSession, SessionStore};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let store: SessionStore<ChatSession> = SessionStore::new(2);
///
///     store.insert("a", ChatSession::new()).await;
///     store.insert("b", ChatSession::new()).await;
///     store.insert("c", ChatSession::new()).await;
///
///     assert!(store.get("a").await.is_none());
///     assert_eq!(store.len().await, 2);
/// }
/// ```
#[derive(Debug)]
pub struct SessionStore<T> {
    /// Uses IndexMap to maintain access order for LRU eviction.
    sessions: RwLock<IndexMap<String, Arc<T>>>,
    max_sessions: usize,
}

impl<T> Default for SessionStore<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

impl<T> SessionStore<T> {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(IndexMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Insert a session, replacing any existing one with the same id.
    ///
    /// Returns the shared handle to the stored value.
    pub async fn insert(&self, id: impl Into<String>, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut sessions = self.sessions.write().await;

        let id = id.into();
        sessions.shift_remove(&id);
        sessions.insert(id, Arc::clone(&value));

        while sessions.len() > self.max_sessions {
            // shift_remove removes the first (oldest) entry
            sessions.shift_remove_index(0);
        }

        value
    }

    /// Look up a session, marking it as recently used.
    pub async fn get(&self, id: &str) -> Option<Arc<T>> {
        let mut sessions = self.sessions.write().await;

        let entry = sessions.shift_remove(id)?;
        sessions.insert(id.to_string(), Arc::clone(&entry));
        Some(entry)
    }

    /// Look up a session, creating it with `init` when missing.
    pub async fn get_or_insert_with(&self, id: &str, init: impl FnOnce() -> T) -> Arc<T> {
        let mut sessions = self.sessions.write().await;

        let entry = match sessions.shift_remove(id) {
            Some(existing) => existing,
            None => Arc::new(init()),
        };
        sessions.insert(id.to_string(), Arc::clone(&entry));

        while sessions.len() > self.max_sessions {
            sessions.shift_remove_index(0);
        }

        entry
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
