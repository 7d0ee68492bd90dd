use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiJson};
use crate::app::GatewayState;
use crate::models::GenerationRequest;
use crate::prompt::Action;
use crate::sanitize::strip_quotes_and_newlines;

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub prompt: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReply {
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct DraftBody {
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DraftReply {
    pub message: String,
    pub subject: String,
}

pub async fn generate(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<GenerateBody>,
) -> Result<Json<GenerateReply>, ApiError> {
    if !state.generator.is_configured() {
        return Err(ApiError::NotConfigured);
    }

    let (Some(prompt), Some(action_raw)) = (
        body.prompt.as_deref().filter(|p| !p.trim().is_empty()),
        body.action.as_deref().filter(|a| !a.is_empty()),
    ) else {
        return Err(ApiError::invalid_field(
            "prompt",
            "Prompt and action are required",
        ));
    };

    let action = Action::parse(action_raw).ok_or_else(|| ApiError::UnknownSelector {
        kind: "action",
        value: action_raw.to_string(),
    })?;

    let result = run_action(&state, action, prompt).await?;
    Ok(Json(GenerateReply { result }))
}

/// Contact-form drafting assistant: the message body and the subject line
/// are generated concurrently from the same brief and joined before
/// responding. If either call fails the whole request fails; a draft is
/// only useful with both fields filled.
pub async fn draft(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<DraftBody>,
) -> Result<Json<DraftReply>, ApiError> {
    if !state.generator.is_configured() {
        return Err(ApiError::NotConfigured);
    }

    let Some(prompt) = body.prompt.as_deref().filter(|p| !p.trim().is_empty()) else {
        return Err(ApiError::invalid_field(
            "prompt",
            "Invalid 'prompt'. Provide a non-empty string.",
        ));
    };

    let (message, subject) = tokio::try_join!(
        run_action(&state, Action::GenerateMessage, prompt),
        run_action(&state, Action::SuggestSubject, prompt),
    )?;

    Ok(Json(DraftReply { message, subject }))
}

async fn run_action(state: &GatewayState, action: Action, prompt: &str) -> Result<String, ApiError> {
    let request = GenerationRequest::new(
        action.prompt(prompt),
        state.config.provider.generate_model.clone(),
    )
    .with_temperature(action.temperature());
    debug!(request_id = %request.id, ?action, "Invoking drafting action");

    let text = state.generator.generate(request).await?;
    if text.trim().is_empty() {
        return Err(ApiError::EmptyResponse);
    }

    Ok(strip_quotes_and_newlines(&text))
}
