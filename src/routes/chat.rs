use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use validator::Validate;

use crate::AppState;
use crate::error::AppError;
use crate::models::requests::ChatRequest;
use crate::models::responses::ChatResponse;
use crate::services::ai::GenerationParams;
use crate::services::safety::EMERGENCY_REPLY;

const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a reply. Please try again.";

// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    body.validate()
        .map_err(|_| AppError::bad_request("Message is required."))?;

    // Red flags short-circuit before any model contact.
    if state.safety.is_emergency(&body.message) {
        tracing::info!("Red flag detected, returning emergency response");
        return Ok(Json(ChatResponse::emergency(EMERGENCY_REPLY)));
    }

    let system_prompt = state.composer.compose(body.language());

    let reply = state
        .generator
        .generate(&body.message, &system_prompt, &GenerationParams::default())
        .await
        .map_err(|e| AppError::upstream(e.to_string(), state.settings.is_development()))?;

    let reply = if reply.trim().is_empty() {
        FALLBACK_REPLY.to_string()
    } else {
        reply
    };

    Ok(Json(ChatResponse::relayed(reply, Utc::now())))
}
