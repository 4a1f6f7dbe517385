//! Tenant cluster API client
//!
//! Applies bootstrap artifacts against the tenant control plane via
//! server-side apply, so repeated application of an unchanged payload is
//! a no-op on the server.

use crate::error::KubeadmError;
use crate::tenant_trait::TenantClientTrait;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{Api, Patch, PatchParams};
use std::collections::BTreeMap;
use tracing::debug;

/// Field manager used for server-side apply patches.
const FIELD_MANAGER: &str = "tenant-control-plane-controller";

/// Tenant cluster API client
#[derive(Clone)]
pub struct TenantClient {
    client: kube::Client,
}

impl std::fmt::Debug for TenantClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantClient").finish_non_exhaustive()
    }
}

impl TenantClient {
    /// Create a new tenant client from an established kube client.
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl TenantClientTrait for TenantClient {
    async fn apply_config_map(
        &self,
        namespace: &str,
        name: &str,
        data: BTreeMap<String, String>,
    ) -> Result<(), KubeadmError> {
        let api: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        let config_map = ConfigMap {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            data: Some(data),
            ..Default::default()
        };

        debug!("Applying ConfigMap {}/{}", namespace, name);
        let pp = PatchParams::apply(FIELD_MANAGER).force();
        api.patch(name, &pp, &Patch::Apply(&config_map)).await?;

        Ok(())
    }

    async fn apply_secret(
        &self,
        namespace: &str,
        name: &str,
        secret_type: &str,
        string_data: BTreeMap<String, String>,
    ) -> Result<(), KubeadmError> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = Secret {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            type_: Some(secret_type.to_string()),
            string_data: Some(string_data),
            ..Default::default()
        };

        debug!("Applying Secret {}/{}", namespace, name);
        let pp = PatchParams::apply(FIELD_MANAGER).force();
        api.patch(name, &pp, &Patch::Apply(&secret)).await?;

        Ok(())
    }
}
