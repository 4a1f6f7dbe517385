//! Prints the TenantControlPlane CRD manifest as YAML.
//!
//! Usage: `cargo run --bin crdgen > deploy/crds/tenantcontrolplanes.yaml`

use crds::TenantControlPlane;
use kube::CustomResourceExt;

fn main() -> Result<(), serde_yaml::Error> {
    print!("{}", serde_yaml::to_string(&TenantControlPlane::crd())?);

    Ok(())
}
