//! The Generator trait definition.

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::message::MediaAttachments;

/// What a generator hands back for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Explanation text. May be empty when the answer is purely visual.
    pub explanation: String,
    /// Media produced for the answer.
    pub media: MediaAttachments,
}

impl Reply {
    pub fn new(explanation: impl Into<String>, media: MediaAttachments) -> Self {
        Self {
            explanation: explanation.into(),
            media,
        }
    }
}

/// A collaborator that turns a natural-language question into an explanation.
///
/// Implementations range from the HTTP client for the generation backend to
/// canned test doubles. This trait is object-safe and can be used with
/// `Arc<dyn Generator>`.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Answer a single question.
    ///
    /// # Arguments
    ///
    /// * `question` - The text the user submitted, as typed.
    async fn generate(&self, question: &str) -> Result<Reply, GenerationError>;

    /// Get a human-readable name for this generator.
    fn name(&self) -> &str;
}
