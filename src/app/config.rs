use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Override for the Gemini API base URL. `None` uses the public endpoint.
    pub api_endpoint: Option<String>,
    pub timeout_seconds: u64,
    pub chat_model: String,
    pub interaction_model: String,
    pub summarize_model: String,
    pub generate_model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            timeout_seconds: 120,
            chat_model: "gemini-1.5-flash-latest".to_string(),
            interaction_model: "gemini-2.0-flash".to_string(),
            summarize_model: "gemini-2.0-flash".to_string(),
            generate_model: "gemini-1.5-flash".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl AppConfig {
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(config_file) = path else {
            info!("No config file given, using default configuration");
            return Ok(Self::default());
        };

        info!("Loading configuration from: {:?}", config_file);

        let config_content = fs::read_to_string(config_file).await?;
        let config: AppConfig = toml::from_str(&config_content)
            .map_err(|e| Error::Config(config::ConfigError::Message(e.to_string())))?;

        config.validate()?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(Error::validation("Server host must not be empty"));
        }

        if self.provider.timeout_seconds == 0 || self.provider.timeout_seconds > 600 {
            return Err(Error::validation(
                "Provider timeout must be between 1 and 600 seconds",
            ));
        }

        for (name, model) in [
            ("chat_model", &self.provider.chat_model),
            ("interaction_model", &self.provider.interaction_model),
            ("summarize_model", &self.provider.summarize_model),
            ("generate_model", &self.provider.generate_model),
        ] {
            if model.is_empty() {
                return Err(Error::validation(format!("Provider {} must not be empty", name)));
            }
        }

        Ok(())
    }
}
