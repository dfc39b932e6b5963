//! OpenAiCompletion implementation using the OpenAI chat completions API.

use async_trait::async_trait;
use reqwest::Client;
use shock_core::{Completion, CompletionChoice, CompletionError, CompletionReply};
use tracing::{debug, info};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::OpenAiConfig;

/// A completion provider backed by an OpenAI-compatible chat API.
///
/// Each call submits one user-role message and maps the reply into the
/// provider-agnostic [`CompletionReply`]. No conversation state is kept.
pub struct OpenAiCompletion {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiCompletion {
    /// Create a new provider with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, CompletionError> {
        let client = Client::builder().build().map_err(|e| {
            CompletionError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(model = %config.model, api_url = %config.api_url, "OpenAiCompletion initialized");

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables.
    ///
    /// See [`OpenAiConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, CompletionError> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    async fn chat_completion(
        &self,
        prompt: &str,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(CompletionError::Service(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(CompletionError::Service(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            CompletionError::Service(format!("Failed to decode response: {}", e))
        })?;

        if let Some(ref usage) = completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl Completion for OpenAiCompletion {
    async fn complete(&self, prompt: &str) -> Result<CompletionReply, CompletionError> {
        let completion = self.chat_completion(prompt).await?;

        Ok(CompletionReply {
            choices: completion
                .choices
                .into_iter()
                .map(|choice| CompletionChoice {
                    content: choice.message.content,
                })
                .collect(),
        })
    }

    fn name(&self) -> &str {
        "OpenAiCompletion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name() {
        let config = OpenAiConfig::builder().api_key("test-key").build();
        let provider = OpenAiCompletion::new(config).unwrap();
        assert_eq!(provider.name(), "OpenAiCompletion");
    }

    #[test]
    fn test_config_accessor() {
        let config = OpenAiConfig::builder()
            .api_key("test-key")
            .model("gpt-4o")
            .build();

        let provider = OpenAiCompletion::new(config).unwrap();
        assert_eq!(provider.config().model, "gpt-4o");
    }
}
