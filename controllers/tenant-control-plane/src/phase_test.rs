//! Unit tests for the kubeadm phase handle and reconciler contract

#[cfg(test)]
mod tests {
    use crate::error::PhaseError;
    use crate::phase::KubeadmPhase;
    use crate::resource::{PhaseOutcome, Resource};
    use crate::test_utils::{
        create_test_phase, create_test_tenant, create_test_tenant_without_status,
    };
    use kubeadm::{Configuration, MockTenantClient};

    #[test]
    fn test_phase_display_names() {
        assert_eq!(KubeadmPhase::UploadConfigKubeadm.to_string(), "PhaseUploadConfigKubeadm");
        assert_eq!(KubeadmPhase::UploadConfigKubelet.to_string(), "PhaseUploadConfigKubelet");
        assert_eq!(KubeadmPhase::AddonCoreDns.to_string(), "PhaseAddonCoreDNS");
        assert_eq!(KubeadmPhase::AddonKubeProxy.to_string(), "PhaseAddonKubeProxy");
        assert_eq!(KubeadmPhase::BootstrapToken.to_string(), "PhaseBootstrapToken");
    }

    #[test]
    fn test_get_status_projects_each_supported_phase() {
        let client = MockTenantClient::new();
        let mut tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        if let Some(status) = tcp.status.as_mut() {
            status.kubeadm_phase.upload_config_kubelet.set_checksum("kubelet-sum");
        }

        let phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubelet);
        assert_eq!(phase.get_status(&tcp).unwrap().checksum(), "kubelet-sum");

        let phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);
        assert_eq!(phase.get_status(&tcp).unwrap().checksum(), "");
    }

    #[test]
    fn test_get_status_rejects_addon_phase() {
        let client = MockTenantClient::new();
        let tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");

        let phase = create_test_phase(&client, KubeadmPhase::AddonCoreDns);

        match phase.get_status(&tcp) {
            Err(PhaseError::UnknownPhase(name)) => assert_eq!(name, "PhaseAddonCoreDNS"),
            other => panic!("expected UnknownPhase, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_then_update_status_then_unchanged() {
        let client = MockTenantClient::new();
        let mut tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);

        // First pass: never applied before
        let outcome = phase.create_or_update(&tcp).await.unwrap();
        assert_eq!(outcome, PhaseOutcome::Created);
        assert!(phase.should_status_be_updated(&tcp));

        phase.update_tenant_control_plane_status(&mut tcp).await.unwrap();
        assert!(!phase.should_status_be_updated(&tcp));

        // Second pass with an unchanged spec: the apply still runs, but no
        // status write is needed
        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);
        let outcome = phase.create_or_update(&tcp).await.unwrap();
        assert_eq!(outcome, PhaseOutcome::Unchanged);
        assert!(!phase.should_status_be_updated(&tcp));
    }

    #[tokio::test]
    async fn test_drift_detection_on_spec_change() {
        let client = MockTenantClient::new();
        let mut tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);

        phase.create_or_update(&tcp).await.unwrap();
        phase.update_tenant_control_plane_status(&mut tcp).await.unwrap();

        // Version bump changes the configuration and therefore the checksum
        tcp.spec.kubernetes.version = "v1.31.0".to_string();
        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);
        let outcome = phase.create_or_update(&tcp).await.unwrap();

        assert_eq!(outcome, PhaseOutcome::Updated);
        assert!(phase.should_status_be_updated(&tcp));
    }

    #[tokio::test]
    async fn test_checksums_match_configuration_checksum() {
        let client = MockTenantClient::new();
        let mut tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);

        phase.create_or_update(&tcp).await.unwrap();
        phase.update_tenant_control_plane_status(&mut tcp).await.unwrap();

        let expected = Configuration::from_tenant(&tcp).unwrap().checksum().unwrap();
        assert_eq!(phase.get_status(&tcp).unwrap().checksum(), expected);
    }

    #[tokio::test]
    async fn test_apply_failure_leaves_status_untouched() {
        let client = MockTenantClient::new();
        let mut tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        if let Some(status) = tcp.status.as_mut() {
            status.kubeadm_phase.upload_config_kubeadm.set_checksum("abc123");
        }

        client.set_fail_config_maps(true);
        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);
        let result = phase.create_or_update(&tcp).await;

        assert!(matches!(result, Err(PhaseError::Kubeadm(_))));
        assert_eq!(phase.get_status(&tcp).unwrap().checksum(), "abc123");
    }

    #[tokio::test]
    async fn test_unsupported_phase_applies_nothing() {
        let client = MockTenantClient::new();
        let tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        let mut phase = create_test_phase(&client, KubeadmPhase::AddonKubeProxy);

        let result = phase.create_or_update(&tcp).await;

        match result {
            Err(PhaseError::UnsupportedPhase(name)) => assert_eq!(name, "PhaseAddonKubeProxy"),
            other => panic!("expected UnsupportedPhase, got {other:?}"),
        }
        assert!(client.get_config_map("kube-system", "kubeadm-config").is_none());
        assert!(client.secret_names("kube-system").is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_token_phase_issues_secret() {
        let client = MockTenantClient::new();
        let mut tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        let mut phase = create_test_phase(&client, KubeadmPhase::BootstrapToken);

        let outcome = phase.create_or_update(&tcp).await.unwrap();
        assert_eq!(outcome, PhaseOutcome::Created);

        phase.update_tenant_control_plane_status(&mut tcp).await.unwrap();
        assert!(!phase.should_status_be_updated(&tcp));
        assert_eq!(client.secret_names("kube-system").len(), 1);
    }

    #[test]
    fn test_status_lookup_failure_degrades_to_no_update() {
        let client = MockTenantClient::new();
        let tcp = create_test_tenant_without_status("tenant-a", "v1.30.2", "172.16.0.2");

        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);
        phase.set_kubeadm_config_checksum("abc123");

        // Conservative default: no status block means no update is needed
        assert!(!phase.should_status_be_updated(&tcp));
    }

    #[tokio::test]
    async fn test_update_status_fails_without_status_block() {
        let client = MockTenantClient::new();
        let mut tcp = create_test_tenant_without_status("tenant-a", "v1.30.2", "172.16.0.2");

        let phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);
        let result = phase.update_tenant_control_plane_status(&mut tcp).await;

        assert!(matches!(result, Err(PhaseError::StatusLookup(_))));
    }

    #[tokio::test]
    async fn test_phase_family_never_requires_cleanup() {
        let client = MockTenantClient::new();
        let tcp = create_test_tenant("tenant-a", "v1.30.2", "172.16.0.2");
        let mut phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);

        assert!(!phase.should_cleanup(&tcp));
        assert!(!phase.cleanup(&tcp).await.unwrap());
        phase.define(&tcp).await.unwrap();
    }

    #[test]
    fn test_get_name_and_client() {
        let client = MockTenantClient::new();
        let phase = create_test_phase(&client, KubeadmPhase::UploadConfigKubeadm);

        assert_eq!(phase.get_name(), "tenant-a");
        let _handle = phase.get_client();
    }
}
