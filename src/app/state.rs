use std::sync::Arc;

use crate::app::AppConfig;
use crate::models::TextGenerator;

/// Shared per-process state handed to every request handler.
///
/// The generator holds only an HTTP client and a credential and is never
/// mutated after construction, so it is shared read-only across requests.
#[derive(Clone)]
pub struct GatewayState {
    pub config: Arc<AppConfig>,
    pub generator: Arc<dyn TextGenerator>,
}

impl GatewayState {
    pub fn new(config: AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            generator,
        }
    }
}
