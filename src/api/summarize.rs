use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiJson};
use crate::app::GatewayState;
use crate::models::GenerationRequest;
use crate::prompt;

#[derive(Debug, Deserialize)]
pub struct SummarizeBody {
    pub content: Option<String>,
    #[serde(rename = "serviceName")]
    pub service_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeReply {
    pub summary: String,
}

/// Renders a service page into the site's fixed Markdown skeleton. The
/// strict template constrains the output shape, so the Markdown is
/// returned verbatim.
pub async fn summarize(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<SummarizeBody>,
) -> Result<Json<SummarizeReply>, ApiError> {
    if !state.generator.is_configured() {
        return Err(ApiError::NotConfigured);
    }

    let (Some(content), Some(service_name)) = (
        body.content.as_deref().filter(|c| !c.trim().is_empty()),
        body.service_name.as_deref().filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(ApiError::invalid_field(
            "content",
            "Missing content or service name",
        ));
    };

    let request = GenerationRequest::new(
        prompt::summarize(content, service_name),
        state.config.provider.summarize_model.clone(),
    );
    debug!(request_id = %request.id, service_name, "Handling summarize request");

    let text = state.generator.generate(request).await?;
    if text.trim().is_empty() {
        return Err(ApiError::EmptyResponse);
    }

    Ok(Json(SummarizeReply { summary: text }))
}
