//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the session key, and error types
//! that form the vocabulary of the drafting domain.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::{SessionContext, SessionKey, TenantId, UserId, NO_TENANT, NO_USER};
