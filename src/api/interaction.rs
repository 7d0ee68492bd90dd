use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiJson};
use crate::app::GatewayState;
use crate::models::GenerationRequest;
use crate::prompt::Task;
use crate::sanitize::normalize_sentiment;

// Fixed sampling for the lightweight interaction widget: deterministic,
// short answers.
const TEMPERATURE: f32 = 0.2;
const TOP_P: f32 = 0.9;
const MAX_OUTPUT_TOKENS: u32 = 128;

#[derive(Debug, Deserialize)]
pub struct InteractionBody {
    pub task: Option<String>,
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InteractionReply {
    pub response: String,
}

pub async fn interaction(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<InteractionBody>,
) -> Result<Json<InteractionReply>, ApiError> {
    if !state.generator.is_configured() {
        return Err(ApiError::NotConfigured);
    }

    let (Some(task_raw), Some(input)) = (
        body.task.as_deref().filter(|t| !t.is_empty()),
        body.input.as_deref().filter(|i| !i.trim().is_empty()),
    ) else {
        return Err(ApiError::invalid_field("task", "Missing 'task' or 'input'"));
    };

    let task = Task::parse(task_raw).ok_or_else(|| ApiError::UnknownSelector {
        kind: "task",
        value: task_raw.to_string(),
    })?;

    let request = GenerationRequest::new(
        task.prompt(input.trim()),
        state.config.provider.interaction_model.clone(),
    )
    .with_temperature(TEMPERATURE)
    .with_top_p(TOP_P)
    .with_max_output_tokens(MAX_OUTPUT_TOKENS);
    debug!(request_id = %request.id, ?task, "Handling interaction request");

    let text = state.generator.generate(request).await?;
    if text.trim().is_empty() {
        return Err(ApiError::EmptyResponse);
    }

    let response = match task {
        Task::Chat => text.trim().to_string(),
        Task::Sentiment => normalize_sentiment(text.trim()).label().to_string(),
    };

    Ok(Json(InteractionReply { response }))
}
