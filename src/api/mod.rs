pub mod chat;
pub mod error;
pub mod generate;
pub mod interaction;
pub mod summarize;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::GatewayState;

pub use error::{ApiError, ApiJson};

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ai/chat", post(chat::chat))
        .route("/api/ai/interaction", post(interaction::interaction))
        .route("/api/ai/summarize", post(summarize::summarize))
        .route("/api/generate", post(generate::generate))
        .route("/api/generate/draft", post(generate::draft))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "Ok"
}
