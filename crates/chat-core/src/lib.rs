//! Core chat types for EduDiff Lite.
//!
//! This crate holds everything the chat page needs that does not touch the
//! network or the browser:
//!
//! - [`Message`] / [`MediaAttachments`] - A chat turn and the media it carries
//! - [`MessageLog`] - The append-only, page-view-scoped list of turns
//! - [`ChatSession`] - The log plus the "awaiting response" flag
//! - [`Generator`] - The trait for the generation collaborator
//! - [`SessionStore`] - A bounded, LRU-evicting map of per-session state
//!
//! # Example
//!
//! ```rust
//! use chat_core::{async_trait, ChatSession, GenerationError, Generator, MediaAttachments, Reply};
//!
//! struct Parrot;
//!
//! #[async_trait]
//! impl Generator for Parrot {
//!     async fn generate(&self, question: &str) -> Result<Reply, GenerationError> {
//!         Ok(Reply::new(format!("You asked: {}", question), MediaAttachments::none()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Parrot"
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut session = ChatSession::new();
//! session.submit(&Parrot, "What is a prime?").await.unwrap();
//! // greeting, question, answer
//! assert_eq!(session.messages().len(), 3);
//! # }
//! ```

mod error;
mod log;
mod message;
mod session;
mod store;
mod trait_def;

pub use error::{GenerationError, SubmitRejected};
pub use log::MessageLog;
pub use message::{Attachment, MediaAttachments, Message, Role};
pub use session::{ChatSession, PendingTurn, FALLBACK_REPLY, GREETING, VISUAL_ONLY_REPLY};
pub use store::SessionStore;
pub use trait_def::{Generator, Reply};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
