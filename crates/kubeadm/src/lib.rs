//! kubeadm bootstrap collaborator
//!
//! Generates kubeadm-equivalent configuration payloads for a tenant control
//! plane and applies the bootstrap phases against the tenant cluster API.
//!
//! # Example
//!
//! ```no_run
//! use kubeadm::{Configuration, TenantClient, upload_kubeadm_config};
//!
//! # async fn example(
//! #     kube_client: kube::Client,
//! #     tcp: crds::TenantControlPlane,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! // Project the declared spec into a kubeadm configuration
//! let config = Configuration::from_tenant(&tcp)?;
//!
//! // The checksum identifies this configuration for drift detection
//! let checksum = config.checksum()?;
//! println!("configuration checksum: {checksum}");
//!
//! // Apply a bootstrap phase against the tenant cluster
//! let client = TenantClient::new(kube_client);
//! let payload = upload_kubeadm_config(&client, &config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Configuration generation**: deterministic projection of a
//!   `TenantControlPlane` spec into init and kubelet payloads
//! - **Content fingerprinting**: SHA-256 checksums over canonical JSON
//! - **Phase apply routines**: upload kubeadm config, upload kubelet config,
//!   create a bootstrap token secret
//! - **Mocking**: in-memory tenant client behind the `test-util` feature

pub mod client;
pub mod error;
pub mod models;
pub mod phases;
#[path = "trait.rs"]
pub mod tenant_trait;
pub mod utils;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::TenantClient;
pub use error::KubeadmError;
pub use models::*;
pub use phases::{bootstrap_token, upload_kubeadm_config, upload_kubelet_config};
pub use tenant_trait::TenantClientTrait;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTenantClient;
