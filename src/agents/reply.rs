//! Reply Agent
//!
//! Continues a conversation the client sends in full on every turn.

use tracing::info;

use crate::agents::invoker::invoke_backend;
use crate::agents::prompt::conversation_prompt;
use crate::config::LLMConfig;
use crate::llm::LLMAdapter;
use crate::models::ConversationHistory;
use crate::types::AppResult;

pub struct ReplyAgent;

impl ReplyAgent {
    pub async fn generate_reply(
        history: &ConversationHistory,
        llm: &dyn LLMAdapter,
        config: &LLMConfig,
    ) -> AppResult<String> {
        info!(turns = history.len(), "Generating reply");
        let reply = invoke_backend(llm, config, conversation_prompt(history)).await?;
        info!(reply_len = reply.len(), "Generated reply successfully");
        Ok(reply)
    }
}
