//! Chat submission flow.

use tracing::{debug, error};

use crate::error::{GenerationError, SubmitRejected};
use crate::log::MessageLog;
use crate::message::{MediaAttachments, Message, Role};
use crate::trait_def::{Generator, Reply};

/// Greeting shown at the top of every new chat.
pub const GREETING: &str =
    "Hello! I'm EduDiff Lite. Ask me any question, and I'll explain it with text, voice, and visual animations!";

/// Assistant text used when the generator produced media but no explanation.
pub const VISUAL_ONLY_REPLY: &str = "Here is a visual explanation.";

/// Assistant text used for every failed generation.
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error generating the explanation. Please try again.";

/// A submission that has been accepted and is waiting for its answer.
///
/// Only [`ChatSession::begin`] creates one, and [`ChatSession::finish`]
/// consumes it, so every accepted question gets exactly one answer.
#[derive(Debug)]
#[must_use = "a pending turn must be finished or the session stays busy"]
pub struct PendingTurn {
    question: String,
}

impl PendingTurn {
    /// The question exactly as submitted.
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// One page view's chat: the message log and the "awaiting response" flag.
#[derive(Debug, Clone)]
pub struct ChatSession {
    log: MessageLog,
    awaiting: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::with_log(MessageLog::with_greeting(GREETING))
    }
}

impl ChatSession {
    /// A new session opened with the standard greeting.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: MessageLog) -> Self {
        Self {
            log,
            awaiting: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Whether a submitted question is still waiting for its answer.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Accept a submission: append the user turn and mark the session busy.
    ///
    /// Whitespace-only input and input arriving while busy are rejected
    /// without touching the log.
    pub fn begin(&mut self, input: &str) -> Result<PendingTurn, SubmitRejected> {
        if input.trim().is_empty() {
            return Err(SubmitRejected::Empty);
        }
        if self.awaiting {
            debug!("Ignoring submission while awaiting a response");
            return Err(SubmitRejected::Busy);
        }

        self.log.append(Role::User, input, MediaAttachments::none());
        self.awaiting = true;

        Ok(PendingTurn {
            question: input.to_string(),
        })
    }

    /// Record the answer for a pending turn and clear the busy flag.
    ///
    /// Failures become the fixed fallback reply; the error itself is only
    /// logged.
    pub fn finish(
        &mut self,
        turn: PendingTurn,
        outcome: Result<Reply, GenerationError>,
    ) -> &Message {
        self.awaiting = false;

        match outcome {
            Ok(reply) => {
                let content = if reply.explanation.is_empty() {
                    VISUAL_ONLY_REPLY.to_string()
                } else {
                    reply.explanation
                };
                self.log.append(Role::Assistant, content, reply.media)
            }
            Err(err) => {
                error!(question = %turn.question, error = %err, "Error generating response");
                self.log
                    .append(Role::Assistant, FALLBACK_REPLY, MediaAttachments::none())
            }
        }
    }

    /// Submit and wait for the answer in place.
    ///
    /// For callers that own the session outright. Shared sessions should use
    /// [`begin`](Self::begin) and [`finish`](Self::finish) so no lock is held
    /// across the generator call.
    pub async fn submit(
        &mut self,
        generator: &dyn Generator,
        input: &str,
    ) -> Result<&Message, SubmitRejected> {
        let turn = self.begin(input)?;
        let outcome = generator.generate(turn.question()).await;
        Ok(self.finish(turn, outcome))
    }
}
