//! The completion provider trait and its reply types.

use async_trait::async_trait;

use crate::error::CompletionError;

/// One choice in a completion reply.
#[derive(Debug, Clone, Default)]
pub struct CompletionChoice {
    /// Generated text; absent when the service returned no content.
    pub content: Option<String>,
}

/// A single-turn completion reply.
///
/// Mirrors the minimum the pipeline depends on: the choice list may be
/// empty, and the first choice's content may be absent. Everything else a
/// provider returns (ids, usage, finish reasons) stays inside the provider.
#[derive(Debug, Clone, Default)]
pub struct CompletionReply {
    /// Choices as returned by the service, in service order.
    pub choices: Vec<CompletionChoice>,
}

impl CompletionReply {
    /// A reply with a single choice carrying the given text.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![CompletionChoice {
                content: Some(content.into()),
            }],
        }
    }

    /// A reply with no choices at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A reply with one choice whose content is absent.
    pub fn without_content() -> Self {
        Self {
            choices: vec![CompletionChoice::default()],
        }
    }

    /// The first choice's content, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.content.as_deref())
    }
}

/// A single-turn text-completion capability.
///
/// Implementations submit one user-role prompt and return the raw generated
/// text. This trait is object-safe and used as `Arc<dyn Completion>`.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Submit a prompt and await the reply.
    ///
    /// Exactly one outbound call per invocation; no retries.
    async fn complete(&self, prompt: &str) -> Result<CompletionReply, CompletionError>;

    /// Human-readable provider name, for logging.
    fn name(&self) -> &str;
}
