//! Failing generator implementation.

use chat_core::{async_trait, GenerationError, Generator, Reply};

/// A generator that fails every request with the same error.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    error: GenerationError,
}

impl FailingGenerator {
    pub fn new(error: GenerationError) -> Self {
        Self { error }
    }

    /// Fail as the backend does when rendering breaks.
    pub fn server_error() -> Self {
        Self::new(GenerationError::Status {
            status: 500,
            message: "Failed to generate video".to_string(),
        })
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::new(GenerationError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl Generator for FailingGenerator {
    async fn generate(&self, _question: &str) -> Result<Reply, GenerationError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "FailingGenerator"
    }
}
