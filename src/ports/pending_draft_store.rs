//! Pending Draft Store Port - Interface for parking incomplete drafts.
//!
//! Holds at most one in-flight draft per session key. The orchestrator reads
//! an entry once and deletes it before acting on it; a fresh entry is written
//! only when a new question is asked.

use async_trait::async_trait;

use crate::domain::drafting::PendingDraft;
use crate::domain::foundation::SessionKey;

/// Errors that can occur during pending-draft storage operations
#[derive(Debug, thiserror::Error)]
pub enum PendingStoreError {
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize pending draft: {0}")]
    SerializationFailed(String),
}

/// Port for parking one incomplete draft per session
#[async_trait]
pub trait PendingDraftStore: Send + Sync {
    /// Fetch the pending draft for a session
    ///
    /// # Arguments
    /// * `key` - The tenant + user session key
    ///
    /// # Returns
    /// The parked draft, or `None` when nothing is pending
    ///
    /// # Errors
    /// Returns `PendingStoreError` if the backend cannot be read
    async fn get(&self, key: &SessionKey) -> Result<Option<PendingDraft>, PendingStoreError>;

    /// Park a draft for a session, replacing any existing entry
    ///
    /// # Errors
    /// Returns `PendingStoreError` if the backend cannot be written
    async fn set(&self, key: &SessionKey, draft: PendingDraft) -> Result<(), PendingStoreError>;

    /// Remove the pending draft for a session; a missing entry is not an error
    ///
    /// # Errors
    /// Returns `PendingStoreError` if the backend cannot be written
    async fn delete(&self, key: &SessionKey) -> Result<(), PendingStoreError>;
}
