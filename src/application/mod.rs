//! Application layer - Handlers.
//!
//! This layer coordinates the drafting domain with its ports: the
//! orchestrator runs conversational turns, the execute handler posts
//! finished drafts.

pub mod handlers;

pub use handlers::{
    DraftOrchestrator, ExecuteDraftCommand, ExecuteDraftError, ExecuteDraftHandler,
    OrchestratorSettings,
};
