//! Agent System
//!
//! Each agent owns one way of talking to the language model:
//!
//! - **Summary Agent**: bullet-point summary of an uploaded document
//! - **Reply Agent**: next assistant turn of a conversation
//!
//! Both go through the same two steps:
//!
//! ```text
//! ExtractedText | ConversationHistory
//!      │
//!      ▼
//! ┌─────────────┐
//! │   prompt    │  → bounded ModelPrompt (truncation, role mapping)
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │   invoker   │  → single backend call, failures become BackendError
//! └─────────────┘
//!      │
//!      ▼
//!    String
//! ```

pub mod invoker;
pub mod prompt;
pub mod reply;
pub mod summary;

pub use invoker::invoke_backend;
pub use prompt::{ModelPrompt, MAX_DOCUMENT_CHARS};
pub use reply::ReplyAgent;
pub use summary::SummaryAgent;
