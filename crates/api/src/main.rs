use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tracing::{info, warn};

use openai_completion::OpenAiCompletion;
use shock_core::{CountryPair, NormalizeError, Normalizer, ShockRecord};

#[derive(Clone)]
struct AppState {
    normalizer: Arc<Normalizer>,
}

#[derive(Debug, Serialize)]
struct ShockResponse {
    result: Vec<ShockRecord>,
}

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let addr = env::var("SHOCK_API_ADDR").unwrap_or_else(|_| "127.0.0.1:8787".to_string());

    let provider = OpenAiCompletion::from_env().expect("Failed to configure OpenAI provider");
    let normalizer = Arc::new(Normalizer::new(Arc::new(provider)));
    info!(provider = normalizer.provider_name(), "normalizer ready");

    let state = AppState { normalizer };

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/culture-shock", post(culture_shock))
        .with_state(state);

    let addr: SocketAddr = addr.parse().expect("Invalid SHOCK_API_ADDR");
    info!(%addr, "Culture-shock API listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

async fn culture_shock(
    State(state): State<AppState>,
    Json(payload): Json<CountryPair>,
) -> Result<Json<ShockResponse>, ApiError> {
    let result = state.normalizer.normalize(&payload).await?;
    Ok(Json(ShockResponse { result }))
}

#[derive(Debug)]
struct ApiError(NormalizeError);

impl From<NormalizeError> for ApiError {
    fn from(err: NormalizeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Raw text and parser diagnostics for malformed replies are already
        // logged by the normalizer; clients only see a short message.
        let message = match &self.0 {
            NormalizeError::MalformedResponse { .. } => "Failed to parse AI response",
            NormalizeError::EmptyCompletion | NormalizeError::Upstream(_) => {
                "Internal Server Error"
            }
        };

        warn!(error = %self.0, "culture-shock request failed");
        let body = serde_json::json!({ "error": message });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_completion::{CannedCompletion, FailingCompletion};

    fn state_with(provider: impl shock_core::Completion + 'static) -> AppState {
        AppState {
            normalizer: Arc::new(Normalizer::new(Arc::new(provider))),
        }
    }

    #[tokio::test]
    async fn test_success_wraps_records_in_result() {
        let state = state_with(CannedCompletion::with_content(
            "```json\n[{\"shock\":\"Tipping is uncommon\",\"severity\":\"Low\",\"tips\":\"Don't tip at restaurants\"}]\n```",
        ));

        let payload = CountryPair::new("Japan", "France");
        let Json(response) = culture_shock(State(state), Json(payload)).await.unwrap();

        assert_eq!(response.result.len(), 1);
        assert_eq!(response.result[0].shock, "Tipping is uncommon");
        assert_eq!(response.result[0].severity, "Low");
        assert_eq!(response.result[0].tips, "Don't tip at restaurants");
    }

    #[tokio::test]
    async fn test_empty_array_is_ok_response() {
        let state = state_with(CannedCompletion::with_content("[]"));

        let payload = CountryPair::new("Japan", "France");
        let Json(response) = culture_shock(State(state), Json(payload)).await.unwrap();

        assert!(response.result.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500() {
        let state = state_with(FailingCompletion::new());

        let payload = CountryPair::new("Japan", "France");
        let err = culture_shock(State(state), Json(payload)).await.unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_reply_message() {
        let state = state_with(CannedCompletion::with_content("not json"));

        let payload = CountryPair::new("Japan", "France");
        let err = culture_shock(State(state), Json(payload)).await.unwrap_err();

        assert!(matches!(err.0, NormalizeError::MalformedResponse { .. }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_empty_completion_is_500() {
        let state = state_with(CannedCompletion::without_choices());

        let payload = CountryPair::new("Japan", "France");
        let err = culture_shock(State(state), Json(payload)).await.unwrap_err();

        assert!(matches!(err.0, NormalizeError::EmptyCompletion));
    }
}
