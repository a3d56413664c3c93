//! In-Memory Tenant Directory Adapter
//!
//! Fixed hint sets per tenant. Useful for testing and for the binary when
//! no directory file is configured.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::drafting::TenantHints;
use crate::domain::foundation::TenantId;
use crate::ports::{DirectoryError, TenantDirectory};

/// In-memory tenant directory
#[derive(Debug, Clone, Default)]
pub struct InMemoryTenantDirectory {
    tenants: HashMap<String, TenantHints>,
}

impl InMemoryTenantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a tenant's records
    pub fn with_tenant(mut self, tenant: &TenantId, hints: TenantHints) -> Self {
        self.tenants.insert(tenant.as_str().to_string(), hints);
        self
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn hints(&self, tenant: &TenantId) -> Result<TenantHints, DirectoryError> {
        Ok(self.tenants.get(tenant.as_str()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_known_tenant_returns_hints() {
        let directory = InMemoryTenantDirectory::new().with_tenant(
            &tenant("acme"),
            TenantHints {
                vendors: vec!["Ikea".into()],
                ..Default::default()
            },
        );

        let hints = directory.hints(&tenant("acme")).await.unwrap();
        assert_eq!(hints.vendors, vec!["Ikea".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_tenant_is_empty() {
        let directory = InMemoryTenantDirectory::new();
        let hints = directory.hints(&tenant("nobody")).await.unwrap();
        assert!(hints.is_empty());
    }

    #[tokio::test]
    async fn test_later_registration_replaces() {
        let directory = InMemoryTenantDirectory::new()
            .with_tenant(&tenant("acme"), TenantHints::empty())
            .with_tenant(
                &tenant("acme"),
                TenantHints {
                    customers: vec!["Beta".into()],
                    ..Default::default()
                },
            );
        let hints = directory.hints(&tenant("acme")).await.unwrap();
        assert_eq!(hints.customers.len(), 1);
    }
}
