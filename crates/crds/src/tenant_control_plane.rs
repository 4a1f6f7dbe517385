//! TenantControlPlane CRD
//!
//! Declares a hosted tenant Kubernetes control plane. The status block
//! persists one checksum record per kubeadm bootstrap phase so that the
//! phase reconciler can detect configuration drift across passes.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "hcp.tenantkube.io",
    version = "v1alpha1",
    kind = "TenantControlPlane",
    namespaced,
    status = "TenantControlPlaneStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct TenantControlPlaneSpec {
    /// Desired Kubernetes control plane settings
    pub kubernetes: KubernetesSpec,

    /// Tenant cluster network settings
    pub network_profile: NetworkProfileSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesSpec {
    /// Kubernetes version for the tenant control plane (e.g., "v1.30.2")
    pub version: String,

    /// Directory holding the tenant control plane certificates
    #[serde(default = "default_certificates_dir")]
    pub certificates_dir: String,
}

fn default_certificates_dir() -> String {
    "/etc/kubernetes/pki".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfileSpec {
    /// Advertised address of the tenant API server
    pub address: String,

    /// Port of the tenant API server
    #[serde(default = "default_api_server_port")]
    pub port: u16,

    /// Cluster DNS domain
    #[serde(default = "default_cluster_domain")]
    pub cluster_domain: String,

    /// Cluster DNS service IP addresses
    #[serde(default)]
    pub dns_service_ips: Vec<String>,
}

fn default_api_server_port() -> u16 {
    6443
}

fn default_cluster_domain() -> String {
    "cluster.local".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct TenantControlPlaneStatus {
    /// Per-phase kubeadm bootstrap state
    #[serde(default)]
    pub kubeadm_phase: KubeadmPhasesStatus,
}

/// Persisted state of every kubeadm bootstrap phase.
///
/// Exactly one record exists per supported phase; records are never removed
/// independently of the owning resource.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmPhasesStatus {
    /// Upload of the kubeadm cluster configuration
    #[serde(default)]
    pub upload_config_kubeadm: KubeadmPhaseStatus,

    /// Upload of the kubelet configuration
    #[serde(default)]
    pub upload_config_kubelet: KubeadmPhaseStatus,

    /// Bootstrap token issuance
    #[serde(default)]
    pub bootstrap_token: KubeadmPhaseStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KubeadmPhaseStatus {
    /// Checksum of the last successfully applied configuration.
    /// Empty means the phase has never been applied.
    #[serde(default)]
    pub checksum: String,

    /// When the checksum was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<chrono::DateTime<chrono::Utc>>,
}

impl KubeadmPhaseStatus {
    /// Returns the last applied checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Records a newly applied checksum and stamps the update time.
    pub fn set_checksum(&mut self, checksum: impl Into<String>) {
        self.checksum = checksum.into();
        self.last_update = Some(chrono::Utc::now());
    }
}
