// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

fn default_session_id() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub timestamp: String,
    pub risk_score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointList,
}

/// Operations listed by the demo endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointList {
    pub chat: String,
    pub health: String,
}
