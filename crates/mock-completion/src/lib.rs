//! Mock completion providers for testing the normalization pipeline.
//!
//! This crate provides canned implementations of the `Completion` trait:
//! - `CannedCompletion` - Returns a fixed reply
//! - `FailingCompletion` - Always returns an error
//! - `DelayedCompletion` - Wraps another provider with artificial delay
//!
//! For production use, see the `openai-completion` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_completion::{CannedCompletion, Completion};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), mock_completion::CompletionError> {
//!     let provider = CannedCompletion::with_content("[]");
//!
//!     let reply = provider.complete("any prompt").await?;
//!     assert_eq!(reply.first_content(), Some("[]"));
//!     Ok(())
//! }
//! ```

mod canned;
mod delayed;
mod failing;

// Re-export shock-core types for convenience
pub use shock_core::{async_trait, Completion, CompletionError, CompletionReply};

pub use canned::CannedCompletion;
pub use delayed::DelayedCompletion;
pub use failing::FailingCompletion;
