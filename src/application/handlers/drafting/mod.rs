//! Drafting handlers.
//!
//! - `DraftOrchestrator` - resolves one user message into a draft
//! - `ExecuteDraftHandler` - posts a ready draft

mod execute_draft;
mod orchestrator;

pub use execute_draft::{ExecuteDraftCommand, ExecuteDraftError, ExecuteDraftHandler};
pub use orchestrator::{
    is_cancellation, DraftOrchestrator, OrchestratorSettings, CHAT_CONFIDENCE,
    INCOMPLETE_CONFIDENCE, RULE_CONFIDENCE,
};
