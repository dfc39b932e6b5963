//! Error types for the normalization pipeline.

use thiserror::Error;

/// Errors a completion provider can report.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider is misconfigured (missing key, bad URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a usable HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered, but with an error or an undecodable body.
    #[error("completion service error: {0}")]
    Service(String),
}

/// Errors from [`Normalizer::normalize`](crate::Normalizer::normalize).
///
/// All variants are terminal for the current invocation; the component never
/// retries internally. Callers may retry by re-invoking the whole operation.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The completion call itself failed.
    #[error("completion request failed: {0}")]
    Upstream(#[from] CompletionError),

    /// The call succeeded but returned no usable text.
    #[error("completion returned no usable text")]
    EmptyCompletion,

    /// The sanitized completion text is not valid JSON.
    ///
    /// Carries the offending text alongside the parser diagnostic so the
    /// caller can log both.
    #[error("completion was not valid JSON: {source}")]
    MalformedResponse {
        /// The sanitized text that failed to parse.
        text: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_from_completion_error() {
        let err: NormalizeError = CompletionError::Network("connection refused".into()).into();
        assert!(matches!(err, NormalizeError::Upstream(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_malformed_keeps_offending_text() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = NormalizeError::MalformedResponse {
            text: "not json".to_string(),
            source,
        };
        match err {
            NormalizeError::MalformedResponse { text, .. } => assert_eq!(text, "not json"),
            _ => panic!("expected MalformedResponse"),
        }
    }
}
