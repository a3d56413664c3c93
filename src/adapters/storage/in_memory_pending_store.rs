//! In-Memory Pending Draft Store Adapter
//!
//! Process-wide map of parked drafts keyed by tenant + user. No expiry;
//! a restart drops everything. Concurrent turns for the same session are
//! last-writer-wins.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::drafting::PendingDraft;
use crate::domain::foundation::SessionKey;
use crate::ports::{PendingDraftStore, PendingStoreError};

/// In-memory storage for pending drafts
#[derive(Debug, Clone)]
pub struct InMemoryPendingStore {
    drafts: Arc<RwLock<HashMap<SessionKey, PendingDraft>>>,
}

impl InMemoryPendingStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            drafts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored drafts (useful for tests)
    pub async fn clear(&self) {
        self.drafts.write().await.clear();
    }

    /// Number of sessions with a parked draft
    pub async fn len(&self) -> usize {
        self.drafts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.drafts.read().await.is_empty()
    }
}

impl Default for InMemoryPendingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PendingDraftStore for InMemoryPendingStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<PendingDraft>, PendingStoreError> {
        let drafts = self.drafts.read().await;
        Ok(drafts.get(key).cloned())
    }

    async fn set(&self, key: &SessionKey, draft: PendingDraft) -> Result<(), PendingStoreError> {
        let mut drafts = self.drafts.write().await;
        drafts.insert(key.clone(), draft);
        Ok(())
    }

    async fn delete(&self, key: &SessionKey) -> Result<(), PendingStoreError> {
        self.drafts.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drafting::{
        DraftData, Intent, MissingFieldStatus, RequiredField, TradeData,
    };
    use crate::domain::foundation::{TenantId, UserId};

    fn key(tenant: &str, user: &str) -> SessionKey {
        let tenant = TenantId::new(tenant).unwrap();
        let user = UserId::new(user).unwrap();
        SessionKey::new(Some(&tenant), Some(&user))
    }

    fn parked_invoice() -> PendingDraft {
        PendingDraft::new(
            Intent::CreateInvoice,
            DraftData::Trade(TradeData::default()),
            MissingFieldStatus::WaitingForCustomer,
            vec![RequiredField::PartnerName, RequiredField::ItemName],
        )
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = InMemoryPendingStore::new();
        assert_eq!(store.get(&key("acme", "u1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemoryPendingStore::new();
        let k = key("acme", "u1");
        store.set(&k, parked_invoice()).await.unwrap();

        let loaded = store.get(&k).await.unwrap().unwrap();
        assert_eq!(loaded.status, MissingFieldStatus::WaitingForCustomer);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_set_replaces_existing() {
        let store = InMemoryPendingStore::new();
        let k = key("acme", "u1");
        store.set(&k, parked_invoice()).await.unwrap();

        let mut next = parked_invoice();
        next.status = MissingFieldStatus::WaitingForItem;
        store.set(&k, next).await.unwrap();

        let loaded = store.get(&k).await.unwrap().unwrap();
        assert_eq!(loaded.status, MissingFieldStatus::WaitingForItem);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemoryPendingStore::new();
        store.set(&key("acme", "u1"), parked_invoice()).await.unwrap();

        assert!(store.get(&key("acme", "u2")).await.unwrap().is_none());
        assert!(store.get(&key("beta", "u1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryPendingStore::new();
        let k = key("acme", "u1");
        store.set(&k, parked_invoice()).await.unwrap();

        store.delete(&k).await.unwrap();
        store.delete(&k).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryPendingStore::new();
        store.set(&key("a", "1"), parked_invoice()).await.unwrap();
        store.set(&key("b", "2"), parked_invoice()).await.unwrap();
        store.clear().await;
        assert_eq!(store.len().await, 0);
    }
}
