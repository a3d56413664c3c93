//! Transaction drafting domain.
//!
//! Turns free-form business messages into structured drafts:
//!
//! - `extractors` - ordered pattern matchers for individual fields
//! - `classifier` - keyword cascade choosing an intent and its payload
//! - `requirements` - mandatory fields per intent
//! - `status` - the single field a parked draft is waiting for
//! - `resolver` - merges a follow-up answer into a parked draft
//! - `assessment` - ready, parked or discarded

mod assessment;
mod classifier;
mod draft;
mod errors;
mod extractors;
mod hints;
mod intent;
mod model_output;
mod pending;
mod prompt;
mod requirements;
mod resolver;
mod status;
mod summary;
mod text;

pub use assessment::{assess, Assessment};
pub use classifier::{
    is_greeting, Classification, IntentClassifier, RuleBasedIntentClassifier, CHAT_PROMPT,
    HELP_MESSAGE,
};
pub use draft::{
    accounts, Draft, DraftData, EmployeeData, FollowUpData, JournalData, JournalLine, LeadData,
    LineItem, PaymentData, PayrollData, PoConversionData, PurchaseOrderData, PurchaseOrderLine,
    SalaryPaymentData, TradeData,
};
pub use errors::{ModelOutputError, ResolveError};
pub use extractors::*;
pub use hints::TenantHints;
pub use intent::Intent;
pub use model_output::{parse_model_output, ModelCandidate};
pub use pending::{DraftSummary, PendingDraft};
pub use prompt::system_prompt;
pub use requirements::{missing_fields, required_fields, RequiredField};
pub use resolver::{generate_sku, merge_answer};
pub use status::MissingFieldStatus;
pub use summary::ready_message;
pub use text::{normalize, title_case, DEFAULT_MAX_INPUT_CHARS};
