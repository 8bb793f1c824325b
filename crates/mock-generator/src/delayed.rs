//! Delayed generator implementation - wraps another generator with artificial delay.

use std::time::Duration;

use chat_core::{async_trait, GenerationError, Generator, Reply};
use tokio::time::sleep;

/// A generator that wraps another generator and adds artificial delay.
///
/// Useful for simulating backend latency and for holding a chat session in
/// its "awaiting response" state.
pub struct DelayedGenerator<G: Generator> {
    inner: G,
    delay: Duration,
}

impl<G: Generator> DelayedGenerator<G> {
    /// Create a new DelayedGenerator wrapping the given generator with the specified delay.
    pub fn new(inner: G, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a generator with a delay in milliseconds.
    pub fn with_millis(inner: G, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<G: Generator> Generator for DelayedGenerator<G> {
    async fn generate(&self, question: &str) -> Result<Reply, GenerationError> {
        sleep(self.delay).await;
        self.inner.generate(question).await
    }

    fn name(&self) -> &str {
        "DelayedGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CannedGenerator;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_generator() {
        let generator = DelayedGenerator::with_millis(CannedGenerator::text("later"), 100);

        let start = Instant::now();
        let reply = generator.generate("test").await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(reply.explanation, "later");
        assert!(elapsed >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_generator_name() {
        let generator = DelayedGenerator::with_millis(CannedGenerator::default(), 0);
        assert_eq!(generator.name(), "DelayedGenerator");
    }
}
