//! Delayed completion implementation - wraps another provider with artificial delay.

use std::time::Duration;

use shock_core::{async_trait, Completion, CompletionError, CompletionReply};
use tokio::time::sleep;

/// A provider that wraps another provider and adds artificial delay.
///
/// Useful for testing caller-side timeout handling and simulating API latency.
pub struct DelayedCompletion<C: Completion> {
    inner: C,
    delay: Duration,
}

impl<C: Completion> DelayedCompletion<C> {
    /// Create a new DelayedCompletion wrapping the given provider with the specified delay.
    pub fn new(inner: C, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a provider with a delay in milliseconds.
    pub fn with_millis(inner: C, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<C: Completion> Completion for DelayedCompletion<C> {
    async fn complete(&self, prompt: &str) -> Result<CompletionReply, CompletionError> {
        sleep(self.delay).await;
        self.inner.complete(prompt).await
    }

    fn name(&self) -> &str {
        "DelayedCompletion"
    }
}
