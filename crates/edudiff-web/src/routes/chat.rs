//! Chat page, its htmx fragments and the JSON view of a chat.

use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::{Form, Json};
use chat_core::{ChatSession, Message};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::identity::{Identity, MaybeIdentity};
use crate::media::{message_views, MessageView};
use crate::state::{AppState, SharedChat};

/// Signed-in user shown in the chat header.
pub struct UserBadge {
    pub name: String,
    pub image_url: Option<String>,
}

impl From<&Identity> for UserBadge {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.display_name(),
            image_url: identity.image_url.clone(),
        }
    }
}

/// Full chat page template.
#[derive(Template)]
#[template(path = "chat.html")]
pub struct ChatTemplate {
    pub session_id: String,
    pub messages: Vec<MessageView>,
    pub awaiting: bool,
    pub user: Option<UserBadge>,
    pub sign_in_url: String,
    pub sign_out_url: String,
}

/// The chat panel fragment swapped in by htmx.
#[derive(Template)]
#[template(path = "messages.html")]
pub struct MessagesTemplate {
    pub session_id: String,
    pub messages: Vec<MessageView>,
    pub awaiting: bool,
}

impl MessagesTemplate {
    fn from_session(session_id: String, chat: &ChatSession) -> Self {
        Self {
            session_id,
            messages: message_views(chat.messages()),
            awaiting: chat.is_awaiting(),
        }
    }
}

/// Form posted by the chat input.
#[derive(Deserialize)]
pub struct SendForm {
    #[serde(default)]
    pub text: String,
}

/// JSON view of a chat.
#[derive(Serialize)]
pub struct ChatSnapshot {
    pub awaiting: bool,
    pub messages: Vec<Message>,
}

/// Open a new chat page view.
///
/// Every load starts a fresh session, so reloading discards the old log.
pub async fn chat_page(
    State(state): State<AppState>,
    MaybeIdentity(identity): MaybeIdentity,
) -> ChatTemplate {
    let session_id = Uuid::new_v4().to_string();
    let chat = ChatSession::new();
    let messages = message_views(chat.messages());

    state.chats.insert(session_id.clone(), Mutex::new(chat)).await;
    debug!(session = %session_id, "Chat page view opened");

    ChatTemplate {
        session_id,
        messages,
        awaiting: false,
        user: identity.as_ref().map(UserBadge::from),
        sign_in_url: state.auth.sign_in_url.clone(),
        sign_out_url: state.auth.sign_out_url.clone(),
    }
}

/// Submit a question.
///
/// The user turn is appended before this returns; the answer arrives on a
/// spawned task and shows up on a later poll of the fragment.
pub async fn send_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Form(form): Form<SendForm>,
) -> Result<MessagesTemplate> {
    let chat = state.chat(&session_id).await?;

    let mut guard = chat.lock().await;
    match guard.begin(&form.text) {
        Ok(turn) => {
            let generator = Arc::clone(&state.generator);
            let pending_chat: SharedChat = Arc::clone(&chat);

            // Fire-and-forget: the answer, or the fallback reply on failure,
            // is written into the session; nothing flows back to this request.
            tokio::spawn(async move {
                let outcome = generator.generate(turn.question()).await;
                pending_chat.lock().await.finish(turn, outcome);
            });
        }
        Err(rejected) => debug!(session = %session_id, "Submission ignored: {}", rejected),
    }

    Ok(MessagesTemplate::from_session(session_id, &guard))
}

/// Current chat panel; polled while an answer is awaited.
pub async fn messages_fragment(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<MessagesTemplate> {
    let chat = state.chat(&session_id).await?;
    let guard = chat.lock().await;
    Ok(MessagesTemplate::from_session(session_id, &guard))
}

/// Chat state as JSON.
pub async fn chat_api(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ChatSnapshot>> {
    let chat = state.chat(&session_id).await?;
    let guard = chat.lock().await;
    Ok(Json(ChatSnapshot {
        awaiting: guard.is_awaiting(),
        messages: guard.messages().to_vec(),
    }))
}
