//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the drafting domain and the outside world. Adapters implement these ports.
//!
//! ## Drafting Ports
//!
//! - `AIProvider` - Optional language model used for classification
//! - `PendingDraftStore` - One parked draft per tenant + user
//! - `TenantDirectory` - Known accounts, partners, products, employees and leads
//! - `DraftPoster` - Hands finalized drafts to the ledger

mod ai_provider;
mod draft_poster;
mod pending_draft_store;
mod tenant_directory;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use draft_poster::{DraftPoster, PostingError, PostingReceipt};
pub use pending_draft_store::{PendingDraftStore, PendingStoreError};
pub use tenant_directory::{DirectoryError, TenantDirectory};
