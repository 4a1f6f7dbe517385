//! Bootstrap phase apply routines
//!
//! Each routine performs the externally-visible effect of one kubeadm
//! bootstrap phase against the tenant cluster: uploading a configuration
//! artifact or issuing a bootstrap token secret. Upload routines return the
//! rendered payload so callers can fingerprint or audit it.

use crate::error::KubeadmError;
use crate::models::{BootstrapToken, Configuration};
use crate::tenant_trait::TenantClientTrait;
use std::collections::BTreeMap;
use tracing::info;

/// Namespace holding the bootstrap artifacts in the tenant cluster.
const SYSTEM_NAMESPACE: &str = "kube-system";

/// Secret type of kubeadm bootstrap tokens.
const BOOTSTRAP_TOKEN_SECRET_TYPE: &str = "bootstrap.kubernetes.io/token";

/// Uploads the kubeadm cluster configuration to the tenant cluster.
///
/// Renders the init configuration as YAML, applies it as the
/// `kubeadm-config` ConfigMap in `kube-system`, and returns the rendered
/// payload bytes.
pub async fn upload_kubeadm_config(
    client: &dyn TenantClientTrait,
    config: &Configuration,
) -> Result<Option<Vec<u8>>, KubeadmError> {
    let rendered = serde_yaml::to_string(&config.init_configuration)?;

    let mut data = BTreeMap::new();
    data.insert("ClusterConfiguration".to_string(), rendered.clone());
    client
        .apply_config_map(SYSTEM_NAMESPACE, "kubeadm-config", data)
        .await?;

    info!("Uploaded kubeadm configuration");
    Ok(Some(rendered.into_bytes()))
}

/// Uploads the kubelet configuration to the tenant cluster.
///
/// Renders the kubelet configuration as YAML, applies it as the
/// `kubelet-config` ConfigMap in `kube-system`, and returns the rendered
/// payload bytes.
pub async fn upload_kubelet_config(
    client: &dyn TenantClientTrait,
    config: &Configuration,
) -> Result<Option<Vec<u8>>, KubeadmError> {
    let rendered = serde_yaml::to_string(&config.kubelet_configuration)?;

    let mut data = BTreeMap::new();
    data.insert("kubelet".to_string(), rendered.clone());
    client
        .apply_config_map(SYSTEM_NAMESPACE, "kubelet-config", data)
        .await?;

    info!("Uploaded kubelet configuration");
    Ok(Some(rendered.into_bytes()))
}

/// Issues the bootstrap token at slot zero of the given list as a
/// `bootstrap-token-<id>` Secret in `kube-system`.
///
/// The token must be fully populated; callers run enrichment first.
pub async fn bootstrap_token(
    client: &dyn TenantClientTrait,
    tokens: &[BootstrapToken],
) -> Result<(), KubeadmError> {
    let token = tokens
        .first()
        .ok_or_else(|| KubeadmError::InvalidConfig("bootstrap token list is empty".to_string()))?;
    let token_string = token.token.as_ref().ok_or_else(|| {
        KubeadmError::InvalidConfig("bootstrap token carries no token string".to_string())
    })?;
    if token_string.id.is_empty() || token_string.secret.is_empty() {
        return Err(KubeadmError::InvalidConfig(
            "bootstrap token id and secret must be non-empty".to_string(),
        ));
    }

    let mut string_data = BTreeMap::new();
    string_data.insert("token-id".to_string(), token_string.id.clone());
    string_data.insert("token-secret".to_string(), token_string.secret.clone());
    for usage in &token.usages {
        string_data.insert(format!("usage-bootstrap-{usage}"), "true".to_string());
    }
    if !token.groups.is_empty() {
        string_data.insert("auth-extra-groups".to_string(), token.groups.join(","));
    }
    if let Some(description) = &token.description {
        string_data.insert("description".to_string(), description.clone());
    }
    if let Some(ttl) = token.ttl_seconds {
        let expiration = chrono::Utc::now() + chrono::Duration::seconds(ttl);
        string_data.insert("expiration".to_string(), expiration.to_rfc3339());
    }

    let name = format!("bootstrap-token-{}", token_string.id);
    client
        .apply_secret(SYSTEM_NAMESPACE, &name, BOOTSTRAP_TOKEN_SECRET_TYPE, string_data)
        .await?;

    info!("Issued bootstrap token {}", token_string.id);
    Ok(())
}
