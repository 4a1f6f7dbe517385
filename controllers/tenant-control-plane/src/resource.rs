//! Resource contract consumed by the reconciliation driver.
//!
//! The driver serializes reconciliations per `TenantControlPlane` and calls
//! these operations in order: `define`, `create_or_update`, then — if
//! `should_status_be_updated` — `update_tenant_control_plane_status`,
//! followed by the durable status patch the driver itself owns.

use crate::error::PhaseError;
use crds::TenantControlPlane;
use kubeadm::TenantClientTrait;
use std::sync::Arc;

/// Outcome of one `create_or_update` pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The phase was applied for the first time
    Created,
    /// The phase was re-applied with a changed configuration
    Updated,
    /// The phase was re-applied with an unchanged configuration
    Unchanged,
}

/// One reconcilable resource of a tenant control plane.
#[async_trait::async_trait]
pub trait Resource: Send {
    /// Human-readable resource name for diagnostics.
    fn get_name(&self) -> &str;

    /// Handle to the tenant cluster API client.
    fn get_client(&self) -> Arc<dyn TenantClientTrait>;

    /// Pre-apply object construction. No-op for phases that build nothing.
    async fn define(&mut self, tcp: &TenantControlPlane) -> Result<(), PhaseError>;

    /// Applies the resource's externally-visible effect. The apply step runs
    /// unconditionally; checksum comparison gates only the status write.
    async fn create_or_update(
        &mut self,
        tcp: &TenantControlPlane,
    ) -> Result<PhaseOutcome, PhaseError>;

    /// Whether the persisted status record needs a write after a successful
    /// apply.
    fn should_status_be_updated(&self, tcp: &TenantControlPlane) -> bool;

    /// Writes the new checksum into the in-memory status record. Durable
    /// persistence of the mutation is the caller's concern.
    async fn update_tenant_control_plane_status(
        &self,
        tcp: &mut TenantControlPlane,
    ) -> Result<(), PhaseError>;

    /// Whether the resource requires explicit teardown.
    fn should_cleanup(&self, tcp: &TenantControlPlane) -> bool;

    /// Tears the resource down; returns whether anything was removed.
    async fn cleanup(&mut self, tcp: &TenantControlPlane) -> Result<bool, PhaseError>;
}
