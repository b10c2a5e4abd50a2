use tracing::{error, info};

use crate::agents::prompt::ModelPrompt;
use crate::config::LLMConfig;
use crate::llm::LLMAdapter;
use crate::types::{AppError, AppResult, LLMRequest};

/// Send an assembled prompt to the backend and return its text.
///
/// A single attempt. Whatever goes wrong is reported as a backend failure.
pub async fn invoke_backend(
    llm: &dyn LLMAdapter,
    config: &LLMConfig,
    prompt: ModelPrompt,
) -> AppResult<String> {
    let prompt_chars = prompt.char_count();
    let request = LLMRequest {
        model: config.model.clone(),
        system_instruction: Some(prompt.system_instruction().to_string()),
        messages: prompt.into_messages(),
        max_tokens: Some(config.max_tokens),
        temperature: Some(config.temperature),
    };

    info!(
        provider = llm.provider_name(),
        model = %request.model,
        messages = request.messages.len(),
        prompt_chars,
        "Calling language model"
    );

    match llm.create_chat_completion(&request).await {
        Ok(response) => {
            info!(
                finish_reason = %response.finish_reason,
                response_len = response.content.len(),
                total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
                "Language model responded"
            );
            Ok(response.content)
        }
        Err(e) => {
            error!(error = %e, "Language model call failed");
            Err(match e {
                AppError::Backend(message) => AppError::Backend(message),
                other => AppError::Backend(other.to_string()),
            })
        }
    }
}
