use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing is shared between requests but this.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. Default: `GeminiClient`.
    pub model: Arc<dyn TextGenerator>,
    pub config: Config,
}
