use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Optional AI provider tried before the rule-based coach. `None` when
    /// no API key is configured.
    pub llm: Option<Arc<dyn CompletionProvider>>,
}
