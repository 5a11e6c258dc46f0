//! Text Source — pluggable, trait-based prose provider for the pipeline.
//!
//! Default: `LlmTextSource` wrapping the chat-completion client.
//! Tests swap in deterministic doubles so the paginator and handler tests
//! never touch the network.
//!
//! `AppState` holds an `Arc<dyn TextSource>`.

use async_trait::async_trait;

use crate::llm_client::{prompts, LlmClient, LlmError};
use crate::models::request::GenerationRequest;

/// The text source trait. Implement this to swap providers without touching
/// the handler or the layout pipeline.
///
/// Returns the raw generated prose. The caller must not assume the result has
/// the requested paragraph shape; the paginator normalizes whatever comes
/// back. Any error here aborts the whole request.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_text(&self, request: &GenerationRequest) -> Result<String, LlmError>;
}

/// Production text source backed by the chat-completion client.
pub struct LlmTextSource {
    llm: LlmClient,
}

impl LlmTextSource {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextSource for LlmTextSource {
    async fn fetch_text(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let prompt = prompts::document_prompt(request);
        self.llm
            .complete(prompts::DOCUMENT_SYSTEM, &prompt, request.pages)
            .await
    }
}
