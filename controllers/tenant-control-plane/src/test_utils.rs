//! Test utilities for unit testing the phase reconciler
//!
//! This module provides helpers for creating test data and setting up test scenarios.

#[cfg(test)]
use crate::phase::{KubeadmPhase, KubeadmPhaseResource};
#[cfg(test)]
use crds::{
    KubernetesSpec, NetworkProfileSpec, TenantControlPlane, TenantControlPlaneSpec,
    TenantControlPlaneStatus,
};
#[cfg(test)]
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
#[cfg(test)]
use kubeadm::MockTenantClient;
#[cfg(test)]
use std::sync::Arc;

/// Helper to create a test TenantControlPlane with an initialized status block
#[cfg(test)]
pub fn create_test_tenant(name: &str, version: &str, address: &str) -> TenantControlPlane {
    TenantControlPlane {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            ..Default::default()
        },
        spec: TenantControlPlaneSpec {
            kubernetes: KubernetesSpec {
                version: version.to_string(),
                certificates_dir: "/etc/kubernetes/pki".to_string(),
            },
            network_profile: NetworkProfileSpec {
                address: address.to_string(),
                port: 6443,
                cluster_domain: "cluster.local".to_string(),
                dns_service_ips: vec!["10.96.0.10".to_string()],
            },
        },
        status: Some(TenantControlPlaneStatus::default()),
    }
}

/// Helper to create a test TenantControlPlane whose status block is not yet
/// initialized
#[cfg(test)]
pub fn create_test_tenant_without_status(
    name: &str,
    version: &str,
    address: &str,
) -> TenantControlPlane {
    let mut tcp = create_test_tenant(name, version, address);
    tcp.status = None;
    tcp
}

/// Helper to create a phase handle backed by a mock tenant client
#[cfg(test)]
pub fn create_test_phase(client: &MockTenantClient, phase: KubeadmPhase) -> KubeadmPhaseResource {
    KubeadmPhaseResource::new(Arc::new(client.clone()), "tenant-a", phase)
}
