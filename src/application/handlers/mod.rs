//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod drafting;

pub use drafting::{
    DraftOrchestrator, ExecuteDraftCommand, ExecuteDraftError, ExecuteDraftHandler,
    OrchestratorSettings,
};
