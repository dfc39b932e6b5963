//! The culture-shock normalization pipeline.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::completion::Completion;
use crate::error::NormalizeError;
use crate::prompt::{build_prompt, hash_prompt};
use crate::sanitize::strip_code_fence;
use crate::types::{CountryPair, ShockRecord};

/// Turns a [`CountryPair`] into an ordered list of [`ShockRecord`]s, or a
/// classified failure.
///
/// The normalizer is stateless across invocations: each call builds one
/// prompt, makes exactly one completion call, and sanitizes/parses the
/// reply. Concurrent calls are independent; there is no coalescing, caching,
/// or cancellation here.
pub struct Normalizer {
    completion: Arc<dyn Completion>,
}

impl Normalizer {
    /// Create a normalizer backed by the given completion provider.
    pub fn new(completion: Arc<dyn Completion>) -> Self {
        Self { completion }
    }

    /// The backing provider's name, for logging.
    pub fn provider_name(&self) -> &str {
        self.completion.name()
    }

    /// Fetch and normalize culture shocks for a country pair.
    ///
    /// Fails with [`NormalizeError::Upstream`] if the completion call
    /// rejects, [`NormalizeError::EmptyCompletion`] if the reply carries no
    /// usable text, and [`NormalizeError::MalformedResponse`] if the
    /// sanitized text is not valid JSON. An empty array is a success with
    /// zero records, not an error.
    pub async fn normalize(&self, pair: &CountryPair) -> Result<Vec<ShockRecord>, NormalizeError> {
        let prompt = build_prompt(pair);
        debug!(
            provider = self.completion.name(),
            prompt_hash = %hash_prompt(&prompt),
            home = %pair.home_country,
            visiting = %pair.visiting_country,
            "requesting culture shocks"
        );

        let reply = self.completion.complete(&prompt).await?;

        let raw = match reply.first_content() {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(NormalizeError::EmptyCompletion),
        };

        let clean = strip_code_fence(raw);

        let value: Value = serde_json::from_str(clean).map_err(|source| {
            warn!(error = %source, text = clean, "completion was not valid JSON");
            NormalizeError::MalformedResponse {
                text: clean.to_string(),
                source,
            }
        })?;

        // The parsed value must be an array; its elements are trusted once
        // they parse as JSON, so field types are coerced rather than checked.
        let items: Vec<Value> = serde_json::from_value(value).map_err(|source| {
            warn!(error = %source, text = clean, "completion JSON was not an array");
            NormalizeError::MalformedResponse {
                text: clean.to_string(),
                source,
            }
        })?;

        let records: Vec<ShockRecord> = items.iter().map(ShockRecord::from_value).collect();

        debug!(count = records.len(), "normalized culture shocks");
        Ok(records)
    }
}
