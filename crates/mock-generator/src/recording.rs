//! Recording generator implementation - remembers every question it was asked.

use std::sync::Arc;

use chat_core::{async_trait, GenerationError, Generator, Reply};
use tokio::sync::Mutex;

/// A generator that records each question before delegating to `inner`.
///
/// Clones share the same record, so a test can keep one handle while the
/// code under test owns another.
pub struct RecordingGenerator<G: Generator> {
    inner: Arc<G>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl<G: Generator> Clone for RecordingGenerator<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            questions: Arc::clone(&self.questions),
        }
    }
}

impl<G: Generator> RecordingGenerator<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner: Arc::new(inner),
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Questions received so far, in arrival order.
    pub async fn questions(&self) -> Vec<String> {
        self.questions.lock().await.clone()
    }

    /// Number of generation requests issued.
    pub async fn call_count(&self) -> usize {
        self.questions.lock().await.len()
    }
}

#[async_trait]
impl<G: Generator> Generator for RecordingGenerator<G> {
    async fn generate(&self, question: &str) -> Result<Reply, GenerationError> {
        self.questions.lock().await.push(question.to_string());
        self.inner.generate(question).await
    }

    fn name(&self) -> &str {
        "RecordingGenerator"
    }
}
