//! Mock TenantClient for unit testing
//!
//! This module provides a mock implementation of `TenantClientTrait` that can
//! be used in unit tests without requiring a running tenant cluster.

use crate::error::KubeadmError;
use crate::tenant_trait::TenantClientTrait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock TenantClient for testing
///
/// This mock stores applied objects in memory and can be configured to fail
/// for testing error scenarios.
#[derive(Clone, Default)]
pub struct MockTenantClient {
    // In-memory storage keyed by (namespace, name)
    config_maps: Arc<Mutex<HashMap<(String, String), BTreeMap<String, String>>>>,
    secrets: Arc<Mutex<HashMap<(String, String), (String, BTreeMap<String, String>)>>>,
    // Failure injection
    fail_config_maps: Arc<Mutex<bool>>,
    fail_secrets: Arc<Mutex<bool>>,
}

impl std::fmt::Debug for MockTenantClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTenantClient").finish_non_exhaustive()
    }
}

impl MockTenantClient {
    /// Create a new mock client
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stored ConfigMap (for test assertions)
    pub fn get_config_map(&self, namespace: &str, name: &str) -> Option<BTreeMap<String, String>> {
        self.config_maps
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Get a stored Secret as (type, string data) (for test assertions)
    pub fn get_secret(
        &self,
        namespace: &str,
        name: &str,
    ) -> Option<(String, BTreeMap<String, String>)> {
        self.secrets
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Names of all stored Secrets in a namespace (for test assertions)
    pub fn secret_names(&self, namespace: &str) -> Vec<String> {
        self.secrets
            .lock()
            .unwrap()
            .keys()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Make every subsequent ConfigMap apply fail
    pub fn set_fail_config_maps(&self, fail: bool) {
        *self.fail_config_maps.lock().unwrap() = fail;
    }

    /// Make every subsequent Secret apply fail
    pub fn set_fail_secrets(&self, fail: bool) {
        *self.fail_secrets.lock().unwrap() = fail;
    }
}

#[async_trait::async_trait]
impl TenantClientTrait for MockTenantClient {
    async fn apply_config_map(
        &self,
        namespace: &str,
        name: &str,
        data: BTreeMap<String, String>,
    ) -> Result<(), KubeadmError> {
        if *self.fail_config_maps.lock().unwrap() {
            return Err(KubeadmError::InvalidConfig(format!(
                "mock failure applying ConfigMap {}/{}",
                namespace, name
            )));
        }

        self.config_maps
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), data);

        Ok(())
    }

    async fn apply_secret(
        &self,
        namespace: &str,
        name: &str,
        secret_type: &str,
        string_data: BTreeMap<String, String>,
    ) -> Result<(), KubeadmError> {
        if *self.fail_secrets.lock().unwrap() {
            return Err(KubeadmError::InvalidConfig(format!(
                "mock failure applying Secret {}/{}",
                namespace, name
            )));
        }

        self.secrets.lock().unwrap().insert(
            (namespace.to_string(), name.to_string()),
            (secret_type.to_string(), string_data),
        );

        Ok(())
    }
}
