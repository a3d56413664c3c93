//! Tenant Directory Adapters
//!
//! - **InMemoryTenantDirectory** - Fixed hint sets (testing/development)
//! - **YamlTenantDirectory** - Hint sets read from a YAML file per lookup

mod in_memory_directory;
mod yaml_directory;

pub use in_memory_directory::InMemoryTenantDirectory;
pub use yaml_directory::YamlTenantDirectory;
