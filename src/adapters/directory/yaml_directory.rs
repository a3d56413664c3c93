//! YAML Tenant Directory Adapter
//!
//! Reads tenant records from a YAML file keyed by tenant id:
//!
//! ```yaml
//! acme-books:
//!   customers: [Acme Corp, Beta Traders]
//!   vendors: [Ikea]
//!   products: [Widget]
//! ```
//!
//! The file is re-read on every lookup so edits take effect without a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::drafting::TenantHints;
use crate::domain::foundation::TenantId;
use crate::ports::{DirectoryError, TenantDirectory};

/// File-backed tenant directory
#[derive(Debug, Clone)]
pub struct YamlTenantDirectory {
    path: PathBuf,
}

impl YamlTenantDirectory {
    /// # Arguments
    /// * `path` - The YAML file holding every tenant's records
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TenantDirectory for YamlTenantDirectory {
    async fn hints(&self, tenant: &TenantId) -> Result<TenantHints, DirectoryError> {
        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DirectoryError::Io(format!("{}: {}", self.path.display(), e)))?;

        if yaml.trim().is_empty() {
            return Ok(TenantHints::empty());
        }

        let mut tenants: HashMap<String, TenantHints> = serde_yaml::from_str(&yaml)
            .map_err(|e| DirectoryError::Malformed(e.to_string()))?;

        Ok(tenants.remove(tenant.as_str()).unwrap_or_default())
    }
}
