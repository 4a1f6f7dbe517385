//! Phase dispatch table.
//!
//! Maps each phase identity to the function performing its externally
//! visible effect. The phase set is closed, so this is a fixed mapping
//! rather than open-ended dispatch; identities declared without an apply
//! function (the addon phases) resolve to an error naming them.

use crate::enrichment::enrich_bootstrap_tokens;
use crate::error::PhaseError;
use crate::phase::KubeadmPhase;
use kubeadm::{Configuration, KubeadmError, TenantClientTrait};
use std::future::Future;
use std::pin::Pin;

/// Future returned by a phase apply function.
pub type ApplyFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, KubeadmError>> + Send + 'a>>;

/// A phase apply function: takes the tenant API client and the fully
/// resolved configuration, returns an optional payload (the rendered
/// artifact for upload phases, `None` for credential phases).
pub type ApplyFn = for<'a> fn(&'a dyn TenantClientTrait, &'a Configuration) -> ApplyFuture<'a>;

/// Resolves the apply function for a phase.
pub fn kubeadm_function(phase: KubeadmPhase) -> Result<ApplyFn, PhaseError> {
    match phase {
        KubeadmPhase::UploadConfigKubeadm => Ok(upload_kubeadm_config),
        KubeadmPhase::UploadConfigKubelet => Ok(upload_kubelet_config),
        KubeadmPhase::BootstrapToken => Ok(bootstrap_token),
        unsupported => Err(PhaseError::UnsupportedPhase(unsupported.to_string())),
    }
}

fn upload_kubeadm_config<'a>(
    client: &'a dyn TenantClientTrait,
    config: &'a Configuration,
) -> ApplyFuture<'a> {
    Box::pin(kubeadm::upload_kubeadm_config(client, config))
}

fn upload_kubelet_config<'a>(
    client: &'a dyn TenantClientTrait,
    config: &'a Configuration,
) -> ApplyFuture<'a> {
    Box::pin(kubeadm::upload_kubelet_config(client, config))
}

fn bootstrap_token<'a>(
    client: &'a dyn TenantClientTrait,
    config: &'a Configuration,
) -> ApplyFuture<'a> {
    Box::pin(async move {
        let tokens = enrich_bootstrap_tokens(&config.init_configuration.bootstrap_tokens)?;
        kubeadm::bootstrap_token(client, &tokens).await?;

        Ok(None)
    })
}
