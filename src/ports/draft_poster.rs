//! Draft Poster Port - Hands finalized drafts to the ledger.
//!
//! The drafting engine stops at structural completeness. A poster turns a
//! ready draft into the actual transaction, invoice, bill or payroll record
//! and enforces double-entry balance at posting time.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::drafting::{Draft, Intent};
use crate::domain::foundation::TenantId;

/// Errors that can occur while posting a draft
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    #[error("Journal is unbalanced: debits {debit} != credits {credit}")]
    Unbalanced { debit: f64, credit: f64 },

    #[error("Intent {0} cannot be posted")]
    Unsupported(Intent),

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Acknowledgement returned by a poster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingReceipt {
    pub posting_id: Uuid,
    pub intent: Intent,
}

impl PostingReceipt {
    pub fn new(intent: Intent) -> Self {
        Self {
            posting_id: Uuid::new_v4(),
            intent,
        }
    }
}

/// Port for posting ready drafts
#[async_trait]
pub trait DraftPoster: Send + Sync {
    /// Post a finalized draft for a tenant
    ///
    /// # Errors
    /// Returns `PostingError::Unbalanced` for journals whose sides differ
    async fn post(&self, tenant: &TenantId, draft: &Draft) -> Result<PostingReceipt, PostingError>;
}
