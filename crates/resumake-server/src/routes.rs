//! HTTP routes: resume generation + liveness probe.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/v1/resume/generate` | Generate resume data from a description. |
//! | `GET`  | `/api/v1/resume/health` | Liveness check — always `200 OK`. |

use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use resumake_llm::{Error, ParsedReply};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, error, info_span};
use uuid::Uuid;

/// Build the application router. CORS is wide open; the upstream credential
/// never leaves the server, so the surface is safe to expose to browsers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/resume/generate", post(generate))
        .route("/api/v1/resume/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `POST /api/v1/resume/generate` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub user_description: String,
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ParsedReply>, ApiError> {
    let span = info_span!("resume.generate", request.id = %Uuid::new_v4());
    let reply = state
        .generator
        .generate(&request.user_description)
        .instrument(span)
        .await?;
    Ok(Json(reply))
}

async fn health() -> &'static str {
    "Application is running!"
}

/// Pipeline failures mapped onto HTTP responses.
///
/// Upstream status and body are forwarded for diagnosis; the credential is
/// not part of any [`Error`] variant, so nothing here can leak it.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Api { .. } | Error::Http(_) | Error::MalformedReply(_) => {
                StatusCode::BAD_GATEWAY
            }
            Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            // Startup-checked conditions; unreachable per request in practice.
            Error::MissingApiKey(_) | Error::TemplateNotFound(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let detail = self.0.to_string();
        error!(%status, "resume generation failed: {detail}");
        (status, Json(json!({ "error": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use resumake_llm::{CompletionClient, ResumeGenerator, Result as LlmResult};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct CannedClient(&'static str);

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, _prompt: &str) -> LlmResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingClient(Error);

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _prompt: &str) -> LlmResult<String> {
            Err(match &self.0 {
                Error::Api { status, body } => Error::Api {
                    status: *status,
                    body: body.clone(),
                },
                Error::Timeout(secs) => Error::Timeout(*secs),
                other => Error::MalformedReply(other.to_string()),
            })
        }
    }

    fn app_with(client: Arc<dyn CompletionClient>) -> Router {
        router(AppState::new(ResumeGenerator::new(client)))
    }

    fn generate_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/resume/generate")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_parsed_reply() {
        let app = app_with(Arc::new(CannedClient(
            "<think>ok</think>```json\n{\"summary\":\"a rust dev\"}\n```",
        )));
        let response = app
            .oneshot(generate_request(r#"{"userDescription":"rust developer"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["think"], "ok");
        assert_eq!(value["data"]["summary"], "a rust dev");
    }

    #[tokio::test]
    async fn test_unparseable_reply_still_succeeds_with_null_fields() {
        let app = app_with(Arc::new(CannedClient("nothing structured")));
        let response = app
            .oneshot(generate_request(r#"{"userDescription":"anyone"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["think"].is_null());
        assert!(value["data"].is_null());
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_bad_gateway() {
        let app = app_with(Arc::new(FailingClient(Error::Api {
            status: 429,
            body: "rate limited".to_string(),
        })));
        let response = app
            .oneshot(generate_request(r#"{"userDescription":"anyone"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["error"].as_str().unwrap().contains("429"));
    }

    #[tokio::test]
    async fn test_timeout_maps_to_gateway_timeout() {
        let app = app_with(Arc::new(FailingClient(Error::Timeout(120))));
        let response = app
            .oneshot(generate_request(r#"{"userDescription":"anyone"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let app = app_with(Arc::new(CannedClient("")));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/resume/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
