//! kubeadm collaborator errors

use thiserror::Error;

/// Errors that can occur while generating or applying kubeadm payloads
#[derive(Debug, Error)]
pub enum KubeadmError {
    /// Kubernetes API error from the tenant cluster
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// JSON serialization error (checksum computation)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML rendering error (artifact payloads)
    #[error("Rendering error: {0}")]
    Rendering(#[from] serde_yaml::Error),

    /// The system entropy source is unavailable.
    /// Bootstrap tokens grant provisioning trust, so there is no fallback
    /// to a predictable generator.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    /// Invalid configuration (e.g., missing required fields)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
