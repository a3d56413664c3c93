//! Tenant Directory Port - Read-only lookup of a tenant's known records.
//!
//! Used only to enrich questions and model prompts with names the tenant
//! already has. Drafting never depends on it for correctness: callers treat
//! any error as an empty hint set.

use async_trait::async_trait;

use crate::domain::drafting::TenantHints;
use crate::domain::foundation::TenantId;

/// Errors that can occur during directory lookups
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Directory unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read directory: {0}")]
    Io(String),

    #[error("Malformed directory data: {0}")]
    Malformed(String),
}

/// Port for looking up a tenant's accounts, partners, products, employees and leads
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Lightweight name projections for a tenant
    ///
    /// # Arguments
    /// * `tenant` - The tenant to look up
    ///
    /// # Returns
    /// Hint lists; an unknown tenant yields empty lists
    ///
    /// # Errors
    /// Returns `DirectoryError` if the backing store cannot be reached or parsed
    async fn hints(&self, tenant: &TenantId) -> Result<TenantHints, DirectoryError>;
}
