//! Failing completion implementation - always rejects.

use shock_core::{async_trait, Completion, CompletionError, CompletionReply};

/// A provider that fails every call with a network error.
///
/// Useful for testing upstream-failure handling.
#[derive(Debug, Clone)]
pub struct FailingCompletion {
    message: String,
}

impl FailingCompletion {
    /// Create a provider that fails with a generic message.
    pub fn new() -> Self {
        Self::with_message("simulated network failure")
    }

    /// Create a provider that fails with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Completion for FailingCompletion {
    async fn complete(&self, _prompt: &str) -> Result<CompletionReply, CompletionError> {
        Err(CompletionError::Network(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingCompletion"
    }
}
