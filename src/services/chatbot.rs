// src/services/chatbot.rs
use chrono::Utc;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{
        completion::{CompletionClient, SYSTEM_PROMPT},
        risk::{DISCLAIMER, RiskFilter},
    },
};

/// Core chat contract, transport-agnostic: score the message, ask the
/// completion capability for a reply, prepend the disclaimer when the score
/// crosses the threshold. Holds no state between calls.
pub async fn generate_reply(
    completion: &dyn CompletionClient,
    risk: &RiskFilter,
    request: &ChatRequest,
) -> Result<ChatResponse, AppError> {
    let risk_score = risk.score(&request.message);

    let generated = completion.complete(SYSTEM_PROMPT, &request.message).await?;

    let response = if risk.needs_disclaimer(risk_score) {
        format!("{DISCLAIMER}\n\n{generated}")
    } else {
        generated
    };

    Ok(ChatResponse {
        response,
        session_id: request.session_id.clone(),
        timestamp: Utc::now().to_rfc3339(),
        risk_score,
    })
}
