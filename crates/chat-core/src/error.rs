//! Error types for chat operations.

use thiserror::Error;

/// Errors a generator can report for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The collaborator could not be reached.
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered with a non-success status.
    #[error("generation failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// Input was empty or whitespace only.
    #[error("nothing to send")]
    Empty,

    /// A response is still awaited for the previous submission.
    #[error("still waiting for the previous answer")]
    Busy,
}
