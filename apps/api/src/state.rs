use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum
/// extractors. Built once in `main` — no global singletons.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production: `GeminiClient`. Tests swap in
    /// a deterministic stub.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
