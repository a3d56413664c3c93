//! Posting Adapters
//!
//! - **InMemoryDraftPoster** - Records posted drafts, rejects unbalanced journals

mod in_memory_poster;

pub use in_memory_poster::{InMemoryDraftPoster, PostedDraft};
