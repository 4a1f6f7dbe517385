//! TenantKube CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for the TenantKube controllers.

pub mod tenant_control_plane;

pub use tenant_control_plane::*;
