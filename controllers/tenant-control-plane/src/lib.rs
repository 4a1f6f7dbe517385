//! Kubeadm phase reconciliation for tenant control planes.
//!
//! This crate drives the kubeadm bootstrap phases of a `TenantControlPlane`
//! to their desired state while avoiding redundant work: each phase carries
//! a content checksum of its last applied configuration, and a new pass only
//! needs a status write when that checksum drifted.
//!
//! The crate is invoked reconcile-on-demand by an external driver; it owns
//! no watch machinery. A driver constructs one [`phase::KubeadmPhaseResource`]
//! per phase and pass, then works through the [`resource::Resource`] trait:
//! `create_or_update`, `should_status_be_updated`,
//! `update_tenant_control_plane_status`.

pub mod dispatcher;
pub mod enrichment;
pub mod error;
pub mod phase;
pub mod resource;

mod enrichment_test;
mod phase_test;
mod test_utils;

pub use error::PhaseError;
pub use phase::{KubeadmPhase, KubeadmPhaseResource};
pub use resource::{PhaseOutcome, Resource};
