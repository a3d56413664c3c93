//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Sentinel used in a [`SessionKey`] when the caller supplied no tenant.
pub const NO_TENANT: &str = "no-tenant";

/// Sentinel used in a [`SessionKey`] when the caller supplied no user.
pub const NO_USER: &str = "no-user";

/// Tenant identifier (one bookkeeping organisation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new TenantId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("tenant_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier (typically from auth provider).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller context accompanying every inbound message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub tenant_id: Option<TenantId>,
    pub user_id: Option<UserId>,
    /// When `Some(false)` the tenant directory is not consulted at all.
    pub db_available: Option<bool>,
}

impl SessionContext {
    /// Creates a context for a known tenant and user.
    pub fn new(tenant_id: TenantId, user_id: UserId) -> Self {
        Self {
            tenant_id: Some(tenant_id),
            user_id: Some(user_id),
            db_available: None,
        }
    }

    /// Creates a context with neither tenant nor user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Sets whether the tenant directory may be consulted.
    pub fn with_db_available(mut self, available: bool) -> Self {
        self.db_available = Some(available);
        self
    }

    /// Directory lookups are skipped only on an explicit `false`.
    pub fn directory_enabled(&self) -> bool {
        self.db_available.unwrap_or(true) && self.tenant_id.is_some()
    }

    /// Derives the pending-draft key for this caller.
    pub fn session_key(&self) -> SessionKey {
        SessionKey::new(self.tenant_id.as_ref(), self.user_id.as_ref())
    }
}

/// Identifies the single in-flight draft slot of a tenant/user pair.
///
/// Absent components collapse to [`NO_TENANT`] / [`NO_USER`] so that
/// anonymous callers still share one well-defined slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    tenant: String,
    user: String,
}

impl SessionKey {
    /// Builds a key, substituting sentinels for missing components.
    pub fn new(tenant: Option<&TenantId>, user: Option<&UserId>) -> Self {
        Self {
            tenant: tenant
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| NO_TENANT.to_string()),
            user: user
                .map(|u| u.as_str().to_string())
                .unwrap_or_else(|| NO_USER.to_string()),
        }
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tenant, self.user)
    }
}
