//! ExecuteDraftHandler - Hand a finalized draft to the ledger poster

use std::sync::Arc;

use crate::domain::drafting::{missing_fields, Draft, Intent};
use crate::domain::foundation::TenantId;
use crate::ports::{DraftPoster, PostingError, PostingReceipt};

/// Command to post a draft for a tenant
#[derive(Debug, Clone)]
pub struct ExecuteDraftCommand {
    pub tenant_id: TenantId,
    pub draft: Draft,
}

/// Error type for executing drafts
#[derive(Debug, thiserror::Error)]
pub enum ExecuteDraftError {
    #[error("Draft for {intent} is not ready to execute")]
    NotReady { intent: Intent },

    #[error("Posting failed: {0}")]
    Posting(#[from] PostingError),
}

/// Handler for posting ready drafts
pub struct ExecuteDraftHandler {
    poster: Arc<dyn DraftPoster>,
}

impl ExecuteDraftHandler {
    pub fn new(poster: Arc<dyn DraftPoster>) -> Self {
        Self { poster }
    }

    /// Posts the draft if it is flagged ready and still complete.
    ///
    /// The payload is re-checked because drafts can be edited or forged
    /// between the turn that produced them and this call.
    pub async fn handle(
        &self,
        cmd: ExecuteDraftCommand,
    ) -> Result<PostingReceipt, ExecuteDraftError> {
        let draft = cmd.draft;
        if !draft.ready_to_execute || !missing_fields(draft.intent, &draft.data).is_empty() {
            return Err(ExecuteDraftError::NotReady {
                intent: draft.intent,
            });
        }

        let receipt = self.poster.post(&cmd.tenant_id, &draft).await?;
        tracing::info!(
            tenant = cmd.tenant_id.as_str(),
            intent = %draft.intent,
            posting_id = %receipt.posting_id,
            "Draft posted"
        );
        Ok(receipt)
    }
}
