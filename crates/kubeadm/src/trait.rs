//! TenantClient trait for mocking
//!
//! This trait abstracts the tenant cluster API client to enable mocking in
//! unit tests. The concrete `TenantClient` implements this trait, and tests
//! use the in-memory mock implementation.

use crate::error::KubeadmError;
use std::collections::BTreeMap;

/// Trait for tenant cluster API operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait TenantClientTrait: Send + Sync {
    /// Create or update a ConfigMap in the tenant cluster.
    async fn apply_config_map(
        &self,
        namespace: &str,
        name: &str,
        data: BTreeMap<String, String>,
    ) -> Result<(), KubeadmError>;

    /// Create or update a Secret in the tenant cluster.
    async fn apply_secret(
        &self,
        namespace: &str,
        name: &str,
        secret_type: &str,
        string_data: BTreeMap<String, String>,
    ) -> Result<(), KubeadmError>;
}
