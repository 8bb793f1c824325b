//! Mock generator implementations for the EduDiff chat flow.
//!
//! This crate provides stand-ins for the generation backend:
//! - `CannedGenerator` - Always answers with the same reply
//! - `FailingGenerator` - Always fails
//! - `DelayedGenerator` - Wraps another generator with artificial latency
//! - `RecordingGenerator` - Wraps another generator and records every question
//!
//! For real answers, use `generation_client::GenerationClient`.
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{CannedGenerator, Generator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_generator::GenerationError> {
//!     let generator = CannedGenerator::default();
//!
//!     let reply = generator.generate("What is the Pythagorean theorem?").await?;
//!     println!("Reply: {}", reply.explanation);
//!     Ok(())
//! }
//! ```

mod canned;
mod delayed;
mod failing;
mod recording;

// Re-export chat-core types for convenience
pub use chat_core::{async_trait, GenerationError, Generator, MediaAttachments, Reply};

pub use canned::CannedGenerator;
pub use delayed::DelayedGenerator;
pub use failing::FailingGenerator;
pub use recording::RecordingGenerator;
