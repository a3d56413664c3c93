//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the drafting domain to external systems:
//! - `ai` - Language model providers (Anthropic, mock)
//! - `directory` - Tenant record lookups (in-memory, YAML file)
//! - `posting` - Ledger posting (in-memory)
//! - `storage` - Pending draft storage (in-memory)

pub mod ai;
pub mod directory;
pub mod posting;
pub mod storage;

pub use ai::{AnthropicConfig, AnthropicProvider, MockAIProvider, MockError};
pub use directory::{InMemoryTenantDirectory, YamlTenantDirectory};
pub use posting::{InMemoryDraftPoster, PostedDraft};
pub use storage::InMemoryPendingStore;
