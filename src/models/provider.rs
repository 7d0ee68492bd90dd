use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// External generative-text capability: prompt + model + sampling in,
/// raw text out. Exactly one call is issued per logical operation; there
/// are no retries and no streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String>;

    /// Whether a credential is available. Handlers check this before any
    /// prompt is built so an unconfigured process degrades to 503 without
    /// attempting a network call.
    fn is_configured(&self) -> bool;

    fn provider_name(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub id: String,
    pub prompt: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt,
            model,
            temperature: None,
            top_p: None,
            max_output_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}
