//! Storage Adapters
//!
//! Implementations of the PendingDraftStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryPendingStore** - Process-wide map of parked drafts
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryPendingStore;
//!
//! let store = Arc::new(InMemoryPendingStore::new());
//! ```

mod in_memory_pending_store;

pub use in_memory_pending_store::InMemoryPendingStore;
