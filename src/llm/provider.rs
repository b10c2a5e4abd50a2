use std::sync::Arc;

use async_trait::async_trait;

use crate::config::LLMConfig;
use crate::llm::openai::OpenAIAdapter;
use crate::types::{AppResult, LLMRequest, LLMResponse};

/// A language-model backend. Implementations report every failure as
/// `AppError::Backend`.
#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;

    /// Name used in logs.
    fn provider_name(&self) -> &'static str;
}

/// Build the process-wide backend client from configuration.
///
/// The credential is optional here: a missing key only surfaces when a
/// request actually reaches the backend.
pub fn create_adapter(config: &LLMConfig) -> Arc<dyn LLMAdapter> {
    Arc::new(OpenAIAdapter::new(config.api_key.clone(), &config.base_url))
}
