//! Kubeadm phase handle and reconciliation logic.
//!
//! A `KubeadmPhaseResource` is a transient, per-pass handle onto one phase
//! of one tenant control plane. It tracks the checksum of the configuration
//! it applied and projects the phase identity onto the persisted status
//! record inside the owning resource.

use crate::dispatcher::kubeadm_function;
use crate::error::PhaseError;
use crate::resource::{PhaseOutcome, Resource};
use crds::{KubeadmPhaseStatus, TenantControlPlane};
use kubeadm::{Configuration, TenantClientTrait};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Identity of one kubeadm bootstrap phase.
///
/// The addon identities are declared but carry no apply function or status
/// record; resolving them reports an unsupported phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KubeadmPhase {
    /// Upload the kubeadm cluster configuration
    UploadConfigKubeadm,
    /// Upload the kubelet configuration
    UploadConfigKubelet,
    /// CoreDNS addon (declared, not dispatched)
    AddonCoreDns,
    /// kube-proxy addon (declared, not dispatched)
    AddonKubeProxy,
    /// Issue a bootstrap token
    BootstrapToken,
}

impl fmt::Display for KubeadmPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UploadConfigKubeadm => "PhaseUploadConfigKubeadm",
            Self::UploadConfigKubelet => "PhaseUploadConfigKubelet",
            Self::AddonCoreDns => "PhaseAddonCoreDNS",
            Self::AddonKubeProxy => "PhaseAddonKubeProxy",
            Self::BootstrapToken => "PhaseBootstrapToken",
        };
        f.write_str(name)
    }
}

/// Per-pass handle onto one kubeadm phase of one tenant control plane.
///
/// Owned exclusively by the reconciliation driver that constructs it; the
/// checksum field is the only mutable state and lives no longer than the
/// pass itself.
pub struct KubeadmPhaseResource {
    client: Arc<dyn TenantClientTrait>,
    name: String,
    phase: KubeadmPhase,
    checksum: String,
}

impl fmt::Debug for KubeadmPhaseResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeadmPhaseResource")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("checksum", &self.checksum)
            .finish_non_exhaustive()
    }
}

impl KubeadmPhaseResource {
    /// Creates a handle for one phase of one reconciliation pass.
    pub fn new(
        client: Arc<dyn TenantClientTrait>,
        name: impl Into<String>,
        phase: KubeadmPhase,
    ) -> Self {
        Self {
            client,
            name: name.into(),
            phase,
            checksum: String::new(),
        }
    }

    /// The phase identity this handle reconciles.
    pub fn phase(&self) -> KubeadmPhase {
        self.phase
    }

    /// Stores the checksum of the configuration applied in this pass.
    pub fn set_kubeadm_config_checksum(&mut self, checksum: impl Into<String>) {
        self.checksum = checksum.into();
    }

    /// Projects the phase identity onto its persisted status record.
    pub fn get_status<'a>(
        &self,
        tcp: &'a TenantControlPlane,
    ) -> Result<&'a KubeadmPhaseStatus, PhaseError> {
        let status = tcp.status.as_ref().ok_or_else(|| {
            PhaseError::StatusLookup(format!("{} status is not initialized", self.name))
        })?;

        match self.phase {
            KubeadmPhase::UploadConfigKubeadm => Ok(&status.kubeadm_phase.upload_config_kubeadm),
            KubeadmPhase::UploadConfigKubelet => Ok(&status.kubeadm_phase.upload_config_kubelet),
            KubeadmPhase::BootstrapToken => Ok(&status.kubeadm_phase.bootstrap_token),
            unknown => Err(PhaseError::UnknownPhase(unknown.to_string())),
        }
    }

    fn get_status_mut<'a>(
        &self,
        tcp: &'a mut TenantControlPlane,
    ) -> Result<&'a mut KubeadmPhaseStatus, PhaseError> {
        let status = tcp.status.as_mut().ok_or_else(|| {
            PhaseError::StatusLookup(format!("{} status is not initialized", self.name))
        })?;

        match self.phase {
            KubeadmPhase::UploadConfigKubeadm => {
                Ok(&mut status.kubeadm_phase.upload_config_kubeadm)
            }
            KubeadmPhase::UploadConfigKubelet => {
                Ok(&mut status.kubeadm_phase.upload_config_kubelet)
            }
            KubeadmPhase::BootstrapToken => Ok(&mut status.kubeadm_phase.bootstrap_token),
            unknown => Err(PhaseError::UnknownPhase(unknown.to_string())),
        }
    }

    /// Whether the persisted checksum matches the one applied in this pass.
    ///
    /// A failed status lookup conservatively reports "equal": the status
    /// schema may not be initialized yet, and skipping one status write is
    /// safer than churning on an ambiguous record.
    fn is_status_equal(&self, tcp: &TenantControlPlane) -> bool {
        match self.get_status(tcp) {
            Ok(status) => status.checksum() == self.checksum,
            Err(err) => {
                debug!(
                    resource = %self.name,
                    phase = %self.phase,
                    "status lookup failed, treating as unchanged: {err}"
                );
                true
            }
        }
    }
}

#[async_trait::async_trait]
impl Resource for KubeadmPhaseResource {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_client(&self) -> Arc<dyn TenantClientTrait> {
        Arc::clone(&self.client)
    }

    async fn define(&mut self, _tcp: &TenantControlPlane) -> Result<(), PhaseError> {
        Ok(())
    }

    async fn create_or_update(
        &mut self,
        tcp: &TenantControlPlane,
    ) -> Result<PhaseOutcome, PhaseError> {
        let config = Configuration::from_tenant(tcp)?;
        let checksum = config.checksum()?;
        self.set_kubeadm_config_checksum(&checksum);

        let apply = kubeadm_function(self.phase)?;
        apply(self.client.as_ref(), &config).await?;

        // A lookup failure here means the status block is not initialized
        // yet, which is indistinguishable from "never applied".
        let outcome = match self.get_status(tcp) {
            Ok(status) if status.checksum() == checksum => PhaseOutcome::Unchanged,
            Ok(status) if status.checksum().is_empty() => PhaseOutcome::Created,
            Ok(_) => PhaseOutcome::Updated,
            Err(_) => PhaseOutcome::Created,
        };

        info!(
            resource = %self.name,
            phase = %self.phase,
            outcome = ?outcome,
            "Applied kubeadm phase"
        );
        Ok(outcome)
    }

    fn should_status_be_updated(&self, tcp: &TenantControlPlane) -> bool {
        !self.is_status_equal(tcp)
    }

    async fn update_tenant_control_plane_status(
        &self,
        tcp: &mut TenantControlPlane,
    ) -> Result<(), PhaseError> {
        let checksum = self.checksum.clone();
        match self.get_status_mut(tcp) {
            Ok(status) => {
                status.set_checksum(checksum);
                Ok(())
            }
            Err(err) => {
                error!(
                    resource = %self.name,
                    phase = %self.phase,
                    "unable to update the status: {err}"
                );
                Err(err)
            }
        }
    }

    fn should_cleanup(&self, _tcp: &TenantControlPlane) -> bool {
        false
    }

    async fn cleanup(&mut self, _tcp: &TenantControlPlane) -> Result<bool, PhaseError> {
        Ok(false)
    }
}
