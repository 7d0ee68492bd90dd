use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use hanstrix_gateway::app::{AppConfig, GatewayState};
use hanstrix_gateway::cli::Cli;
use hanstrix_gateway::error::Result;
use hanstrix_gateway::models::GeminiProvider;
use hanstrix_gateway::{api, models::TextGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.debug {
        "hanstrix_gateway=debug"
    } else {
        "hanstrix_gateway=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse().expect("valid log directive")),
        )
        .init();

    info!("Starting Hanstrix AI gateway");

    let mut config = AppConfig::load(cli.config.as_deref()).await?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // One authenticated client per process, shared read-only by every
    // request. When the key is absent the service still starts and all
    // AI endpoints answer 503.
    let api_key = std::env::var("GEMINI_API_KEY").ok();
    let provider = GeminiProvider::new(api_key, &config.provider)?;
    if !provider.is_configured() {
        warn!("GEMINI_API_KEY is not set; AI endpoints will return 503");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = GatewayState::new(config, Arc::new(provider));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
