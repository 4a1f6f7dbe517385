//! kubeadm configuration models
//!
//! A reduced kubeadm configuration surface: only the pieces the bootstrap
//! phases consume. `Configuration::from_tenant` is deliberately a pure
//! function of the declared spec so that two reconciliations of an unchanged
//! resource produce byte-identical payloads and therefore equal checksums.

use crate::error::KubeadmError;
use crds::TenantControlPlane;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Fully-resolved configuration for one tenant control plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Cluster-wide init settings (kubeadm InitConfiguration equivalent)
    pub init_configuration: InitConfiguration,

    /// Kubelet settings distributed to tenant nodes
    pub kubelet_configuration: KubeletConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitConfiguration {
    /// Kubernetes version of the tenant control plane
    pub kubernetes_version: String,

    /// Stable endpoint of the tenant API server ("host:port")
    pub control_plane_endpoint: String,

    /// Certificates directory on the tenant control plane
    pub certificates_dir: String,

    /// Bootstrap tokens to issue for joining nodes
    #[serde(default)]
    pub bootstrap_tokens: Vec<BootstrapToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KubeletConfiguration {
    /// Cluster DNS domain
    pub cluster_domain: String,

    /// Cluster DNS service addresses
    pub cluster_dns: Vec<String>,
}

/// A bootstrap credential for joining nodes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapToken {
    /// The token itself; filled in by enrichment when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<BootstrapTokenString>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Token lifetime in seconds; no expiration when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<i64>,

    /// Allowed usages (e.g., "authentication", "signing")
    #[serde(default)]
    pub usages: Vec<String>,

    /// Extra groups granted on authentication
    #[serde(default)]
    pub groups: Vec<String>,
}

/// The two-part bootstrap token string.
///
/// `id` is the public portion (6 alphanumeric chars), `secret` the private
/// one (16 alphanumeric chars). The rendered form is `"<id>.<secret>"`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapTokenString {
    /// Public token identifier
    #[serde(default)]
    pub id: String,

    /// Private token secret
    #[serde(default)]
    pub secret: String,
}

impl fmt::Display for BootstrapTokenString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.secret)
    }
}

impl Configuration {
    /// Projects the declared spec of a tenant control plane into a kubeadm
    /// configuration. Pure: no cluster reads, no randomness.
    pub fn from_tenant(tcp: &TenantControlPlane) -> Result<Self, KubeadmError> {
        let kubernetes = &tcp.spec.kubernetes;
        let network = &tcp.spec.network_profile;

        if kubernetes.version.is_empty() {
            return Err(KubeadmError::InvalidConfig(
                "spec.kubernetes.version must not be empty".to_string(),
            ));
        }
        if network.address.is_empty() {
            return Err(KubeadmError::InvalidConfig(
                "spec.networkProfile.address must not be empty".to_string(),
            ));
        }

        Ok(Self {
            init_configuration: InitConfiguration {
                kubernetes_version: kubernetes.version.clone(),
                control_plane_endpoint: format!("{}:{}", network.address, network.port),
                certificates_dir: kubernetes.certificates_dir.clone(),
                bootstrap_tokens: Vec::new(),
            },
            kubelet_configuration: KubeletConfiguration {
                cluster_domain: network.cluster_domain.clone(),
                cluster_dns: network.dns_service_ips.clone(),
            },
        })
    }

    /// Content checksum of this configuration: hex-encoded SHA-256 over the
    /// canonical JSON serialization. Equal checksums identify semantically
    /// equal configurations.
    pub fn checksum(&self) -> Result<String, KubeadmError> {
        let payload = serde_json::to_vec(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&payload);

        Ok(hex::encode(hasher.finalize()))
    }
}
