use agent_backend::message::ChatResponse;
use agent_backend::routes::create_router;
use agent_backend::services::completion::CompletionClient;
use agent_backend::state::AppState;

use anyhow::bail;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower::util::ServiceExt;

struct CannedCompletion(&'static str);

#[async_trait]
impl CompletionClient for CannedCompletion {
    async fn complete(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

struct BrokenCompletion;

#[async_trait]
impl CompletionClient for BrokenCompletion {
    async fn complete(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
        bail!("connection refused")
    }
}

fn app_with(client: impl CompletionClient + 'static) -> Router {
    let state = Arc::new(AppState::new(Arc::new(client)));
    create_router().with_state(state)
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_endpoint_low_risk() {
    let app = app_with(CannedCompletion("A contract is a binding agreement."));

    let response = app
        .oneshot(post_chat(
            r#"{"message": "Can you give me legal advice about a contract?", "session_id": "s1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat: ChatResponse = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(chat.risk_score, 0.3);
    assert_eq!(chat.session_id, "s1");
    assert!(!chat.response.contains("Disclaimer"));
    assert_eq!(chat.response, "A contract is a binding agreement.");
}

#[tokio::test]
async fn test_chat_endpoint_high_risk_gets_disclaimer() {
    let app = app_with(CannedCompletion("General information only."));

    let response = app
        .oneshot(post_chat(
            r#"{"message": "I need legal advice, medical diagnosis, and financial advice now"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat: ChatResponse = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(chat.risk_score, 0.3 + 0.3 + 0.3);
    assert!(chat.response.starts_with("⚠️ **Disclaimer**"));
    // session_id omitted in the request defaults to "default".
    assert_eq!(chat.session_id, "default");
}

#[tokio::test]
async fn test_chat_timestamp_parses() {
    let app = app_with(CannedCompletion("hi"));

    let before = Utc::now();
    let response = app
        .oneshot(post_chat(r#"{"message": "hello"}"#))
        .await
        .unwrap();
    let after = Utc::now();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat: ChatResponse = serde_json::from_slice(&bytes).unwrap();

    let ts: DateTime<Utc> = DateTime::parse_from_rfc3339(&chat.timestamp)
        .unwrap()
        .with_timezone(&Utc);
    assert!(ts >= before && ts <= after);
}

#[tokio::test]
async fn test_chat_failure_collapses_to_internal_error() {
    let app = app_with(BrokenCompletion);

    let response = app
        .oneshot(post_chat(r#"{"message": "hello", "session_id": "s1"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["detail"], "Internal server error");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(CannedCompletion("unused"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_demo_endpoint_lists_operations() {
    let app = app_with(CannedCompletion("unused"));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let endpoints = body["endpoints"].as_object().unwrap();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints["chat"], "/chat (POST)");
    assert_eq!(endpoints["health"], "/health (GET)");
}
