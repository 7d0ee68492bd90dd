use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiJson};
use crate::app::GatewayState;
use crate::models::GenerationRequest;
use crate::prompt::{self, ChatTurn};
use crate::sanitize::strip_script_tags;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub message: Option<String>,
    pub context: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// Website assistant chat. Conversation memory is supplied by the caller
/// on every request; nothing is kept between calls.
pub async fn chat(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<ChatBody>,
) -> Result<Json<ChatReply>, ApiError> {
    if !state.generator.is_configured() {
        return Err(ApiError::NotConfigured);
    }

    let message = body
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| {
            ApiError::invalid_field("message", "Invalid 'message'. Provide a non-empty string.")
        })?;

    let prompt = prompt::chat(message, body.context.as_deref(), &body.history);
    let request = GenerationRequest::new(prompt, state.config.provider.chat_model.clone());
    debug!(request_id = %request.id, history_turns = body.history.len(), "Handling chat request");

    let text = state.generator.generate(request).await?;
    if text.trim().is_empty() {
        return Err(ApiError::EmptyResponse);
    }

    Ok(Json(ChatReply {
        response: strip_script_tags(&text),
    }))
}
