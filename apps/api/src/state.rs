use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Suggestion backend. Default: Gemini `LlmClient`; tests inject fakes.
    pub suggester: Arc<dyn TextGenerator>,
}
