//! Canned completion implementation - returns a fixed reply.

use shock_core::{async_trait, Completion, CompletionError, CompletionReply};

/// A provider that returns the same reply for every prompt.
///
/// Useful for testing the pipeline without any network traffic.
#[derive(Debug, Clone, Default)]
pub struct CannedCompletion {
    reply: CannedReply,
}

#[derive(Debug, Clone, Default)]
enum CannedReply {
    Content(String),
    #[default]
    NoChoices,
    NoContent,
}

impl CannedCompletion {
    /// A provider whose single choice carries the given text.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            reply: CannedReply::Content(content.into()),
        }
    }

    /// A provider that returns an empty choice list.
    pub fn without_choices() -> Self {
        Self {
            reply: CannedReply::NoChoices,
        }
    }

    /// A provider whose single choice has no content.
    pub fn without_content() -> Self {
        Self {
            reply: CannedReply::NoContent,
        }
    }
}

#[async_trait]
impl Completion for CannedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<CompletionReply, CompletionError> {
        Ok(match &self.reply {
            CannedReply::Content(content) => CompletionReply::with_content(content.clone()),
            CannedReply::NoChoices => CompletionReply::empty(),
            CannedReply::NoContent => CompletionReply::without_content(),
        })
    }

    fn name(&self) -> &str {
        "CannedCompletion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_content() {
        let provider = CannedCompletion::with_content("[1,2,3]");
        let reply = provider.complete("prompt").await.unwrap();
        assert_eq!(reply.first_content(), Some("[1,2,3]"));
    }

    #[tokio::test]
    async fn test_canned_no_choices() {
        let provider = CannedCompletion::without_choices();
        let reply = provider.complete("prompt").await.unwrap();
        assert!(reply.choices.is_empty());
    }

    #[tokio::test]
    async fn test_canned_no_content() {
        let provider = CannedCompletion::without_content();
        let reply = provider.complete("prompt").await.unwrap();
        assert_eq!(reply.choices.len(), 1);
        assert_eq!(reply.first_content(), None);
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = CannedCompletion::default();
        assert_eq!(provider.name(), "CannedCompletion");
    }
}
