//! OpenAI-backed completion provider.
//!
//! This crate implements the [`shock_core::Completion`] trait against an
//! OpenAI-compatible `/v1/chat/completions` endpoint. One prompt in, one
//! reply out; no conversation state, no streaming, no retries.
//!
//! # Example
//!
//! ```rust,no_run
//! use openai_completion::OpenAiCompletion;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = OpenAiCompletion::from_env()?;
//!     // Hand it to a shock_core::Normalizer...
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use client::OpenAiCompletion;
pub use config::OpenAiConfig;

// Re-export shock-core types for convenience
pub use shock_core::{Completion, CompletionError, CompletionReply};
