//! In-Memory Draft Poster Adapter
//!
//! Records posted drafts per tenant. Enforces the one ledger rule that
//! matters at posting time: journal debits must equal credits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::drafting::{Draft, DraftData, Intent};
use crate::domain::foundation::TenantId;
use crate::ports::{DraftPoster, PostingError, PostingReceipt};

/// A draft accepted by the poster.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedDraft {
    pub receipt: PostingReceipt,
    pub draft: Draft,
}

/// In-memory ledger of posted drafts
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftPoster {
    posted: Arc<RwLock<HashMap<String, Vec<PostedDraft>>>>,
}

impl InMemoryDraftPoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything posted for a tenant, oldest first
    pub async fn posted(&self, tenant: &TenantId) -> Vec<PostedDraft> {
        self.posted
            .read()
            .await
            .get(tenant.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DraftPoster for InMemoryDraftPoster {
    async fn post(&self, tenant: &TenantId, draft: &Draft) -> Result<PostingReceipt, PostingError> {
        if draft.intent == Intent::GeneralChat {
            return Err(PostingError::Unsupported(draft.intent));
        }

        if let DraftData::Journal(journal) = &draft.data {
            if !journal.is_balanced() {
                return Err(PostingError::Unbalanced {
                    debit: journal.total_debit(),
                    credit: journal.total_credit(),
                });
            }
        }

        let receipt = PostingReceipt::new(draft.intent);
        self.posted
            .write()
            .await
            .entry(tenant.as_str().to_string())
            .or_default()
            .push(PostedDraft {
                receipt: receipt.clone(),
                draft: draft.clone(),
            });

        Ok(receipt)
    }
}
