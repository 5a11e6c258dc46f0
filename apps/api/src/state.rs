use std::sync::Arc;

use crate::config::Config;
use crate::textsource::TextSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable prose provider. Production: `LlmTextSource`; tests swap in
    /// deterministic doubles.
    pub text_source: Arc<dyn TextSource>,
    pub config: Config,
}
