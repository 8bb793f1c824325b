//! Application state shared across handlers.

use std::sync::Arc;

use chat_core::{ChatSession, Generator, SessionStore};
use database::Database;
use generation_client::GenerationClient;
use tokio::sync::Mutex;

use crate::config::AuthLinks;
use crate::error::{Result, WebError};
use crate::sync::BrowserSession;

/// A chat page view's session, locked only around `begin` and `finish`.
pub type SharedChat = Arc<Mutex<ChatSession>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Answers chat questions.
    pub generator: Arc<dyn Generator>,
    /// Backend client, used for the demo gallery.
    pub backend: GenerationClient,
    /// Chat sessions keyed by page-view id.
    pub chats: Arc<SessionStore<Mutex<ChatSession>>>,
    /// Browser sessions keyed by session cookie.
    pub browsers: Arc<SessionStore<BrowserSession>>,
    pub auth: AuthLinks,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        db: Database,
        generator: Arc<dyn Generator>,
        backend: GenerationClient,
        auth: AuthLinks,
        max_sessions: usize,
    ) -> Self {
        Self {
            db,
            generator,
            backend,
            chats: Arc::new(SessionStore::new(max_sessions)),
            browsers: Arc::new(SessionStore::new(max_sessions)),
            auth,
        }
    }

    /// Look up a chat page view.
    pub async fn chat(&self, id: &str) -> Result<SharedChat> {
        self.chats
            .get(id)
            .await
            .ok_or_else(|| WebError::ChatNotFound(id.to_string()))
    }
}
