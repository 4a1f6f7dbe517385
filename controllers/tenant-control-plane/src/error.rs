//! Phase controller error types.
//!
//! This module defines error types specific to kubeadm phase reconciliation
//! that are not covered by the collaborator library errors.

use kubeadm::KubeadmError;
use thiserror::Error;

/// Errors that can occur while reconciling a kubeadm phase.
#[derive(Debug, Error)]
pub enum PhaseError {
    /// Phase identity with no apply function in the dispatch table
    #[error("no available functionality for phase {0}")]
    UnsupportedPhase(String),

    /// Phase identity with no persisted status record
    #[error("{0} is not a valid kubeadm phase")]
    UnknownPhase(String),

    /// The owning resource's status block is missing the expected field
    #[error("status lookup failed: {0}")]
    StatusLookup(String),

    /// Configuration generation, enrichment, or apply failure
    #[error(transparent)]
    Kubeadm(#[from] KubeadmError),
}
