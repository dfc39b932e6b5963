//! Core types and normalization pipeline for culture-shock completions.
//!
//! This crate defines the shared interface between the HTTP gateway and the
//! completion providers:
//!
//! - [`Completion`] - The trait a completion provider must implement
//! - [`CountryPair`] / [`ShockRecord`] - Request and result types
//! - [`Normalizer`] - Prompt construction, fence sanitization, JSON parsing
//! - [`NormalizeError`] / [`CompletionError`] - Error taxonomies
//!
//! # Example
//!
//! ```rust
//! use shock_core::{Completion, CompletionError, CompletionReply, CountryPair, Normalizer};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl Completion for Canned {
//!     async fn complete(&self, _prompt: &str) -> Result<CompletionReply, CompletionError> {
//!         Ok(CompletionReply::with_content("[]"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Canned"
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let normalizer = Normalizer::new(Arc::new(Canned));
//! let pair = CountryPair::new("Japan", "France");
//! let records = normalizer.normalize(&pair).await.unwrap();
//! assert!(records.is_empty());
//! # }
//! ```

mod completion;
mod error;
mod normalizer;
pub mod prompt;
pub mod sanitize;
mod types;

pub use completion::{Completion, CompletionChoice, CompletionReply};
pub use error::{CompletionError, NormalizeError};
pub use normalizer::Normalizer;
pub use types::{CountryPair, ShockRecord};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
