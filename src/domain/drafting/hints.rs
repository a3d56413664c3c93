//! Tenant hint lists used to enrich questions and model prompts.

use serde::{Deserialize, Serialize};

/// Known names for a tenant, projected from the tenant directory.
///
/// Hints are advisory only; an empty set never blocks drafting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantHints {
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub customers: Vec<String>,
    #[serde(default)]
    pub vendors: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub employees: Vec<String>,
    #[serde(default)]
    pub leads: Vec<String>,
}

impl TenantHints {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.customers.is_empty()
            && self.vendors.is_empty()
            && self.products.is_empty()
            && self.employees.is_empty()
            && self.leads.is_empty()
    }

    /// Keeps at most `limit` names per list.
    pub fn truncated(mut self, limit: usize) -> Self {
        for list in [
            &mut self.accounts,
            &mut self.customers,
            &mut self.vendors,
            &mut self.products,
            &mut self.employees,
            &mut self.leads,
        ] {
            list.truncate(limit);
        }
        self
    }

    /// Compact block for a model system prompt; empty lists are omitted.
    pub fn prompt_block(&self) -> String {
        [
            ("Accounts", &self.accounts),
            ("Customers", &self.customers),
            ("Vendors", &self.vendors),
            ("Products", &self.products),
            ("Employees", &self.employees),
            ("Leads", &self.leads),
        ]
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(label, names)| format!("{}: {}", label, names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// ` Known <label>: a, b.` suffix for a question, or nothing.
pub fn known_suffix(label: &str, names: &[String]) -> String {
    if names.is_empty() {
        String::new()
    } else {
        format!(" Known {}: {}.", label, names.join(", "))
    }
}
