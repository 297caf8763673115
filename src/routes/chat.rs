// src/routes/chat.rs
use axum::{Json, extract::State};
use chrono::Utc;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, DemoResponse, EndpointList, HealthResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = generate_reply(state.completion.as_ref(), &state.risk, &payload).await?;
    Ok(Json(reply))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: VERSION.to_string(),
    })
}

pub async fn demo_handler() -> Json<DemoResponse> {
    Json(DemoResponse {
        message: "Compliance-aware chat agent - demo".to_string(),
        version: VERSION.to_string(),
        endpoints: EndpointList {
            chat: "/chat (POST)".to_string(),
            health: "/health (GET)".to_string(),
        },
    })
}
