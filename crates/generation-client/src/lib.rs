//! Client for the EduDiff generation backend.
//!
//! The backend turns a question into an explanation plus a rendered video,
//! and lists a handful of demo animations for the landing page. This crate
//! supports:
//!
//! - Requesting a generation (`POST /generate`)
//! - Listing demos (`GET /demos`), never failing and never waiting longer
//!   than the configured demo timeout
//! - Rewriting relative media URLs against the configured base
//!
//! # Example
//!
//! ```no_run
//! use generation_client::{ApiConfig, GenerationClient};
//!
//! # async fn example() -> Result<(), generation_client::ApiError> {
//! let client = GenerationClient::new(ApiConfig::default())?;
//!
//! let response = client.generate_video("What is the Pythagorean theorem?").await?;
//! println!("{} -> {:?}", response.explanation, response.video_url);
//!
//! for demo in client.get_demos().await {
//!     println!("{}: {}", demo.title, demo.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::GenerationClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use types::{DemoVideo, GenerateRequest, GenerateResponse};
