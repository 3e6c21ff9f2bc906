// Copyright (c) Microsoft. All rights reserved.

#[cfg(test)]
mod tests {
    use k8s_checks::{
        ensure_ingress_available, ensure_pod_available, ensure_pod_count,
        ensure_service_available, service_account_token_secret, service_endpoint,
    };
    use k8s_config::Config;
    use k8s_errors::{Error, KubeResourceType};
    use kube::api::ListParams;
    use matches::assert_matches;
    use tempfile::tempdir;

    fn load_config(contents: &str) -> Config {
        let dir = tempdir().expect("Can create temp dir");
        let path = dir.path().join("Config.toml");
        std::fs::write(&path, contents).expect("Can write config");

        Config::load_config(&path).expect("Can load config")
    }

    #[test]
    fn web_deployment_is_ready() {
        let config = load_config(r#"node_address_types = ["ExternalIP", "Hostname"]"#);

        // ======= pods ==============================================================================
        let pods: Vec<_> = (1..=3).map(|i| mock_kube::get_pod(&format!("web-{}", i))).collect();
        let filter = ListParams::default().labels("app=web");
        ensure_pod_count(&pods, &filter, 3).expect("All pods created");
        for pod in &pods {
            ensure_pod_available(pod).expect("Pod is available");
        }

        // ======= service ===========================================================================
        let service = mock_kube::get_service_with_type("web", "NodePort", &[]);
        ensure_service_available(&service).expect("Service is available");

        let nodes = vec![
            mock_kube::get_node_with_addresses(
                "node-1",
                Some("aws:///us-east-1b/i-0a1b2c3d4e5f"),
                &[("InternalIP", "10.0.0.4"), ("Hostname", "node-1.internal")],
            ),
            mock_kube::get_node_with_addresses("node-2", None, &[("ExternalIP", "52.1.2.3")]),
        ];
        let endpoint =
            service_endpoint(&service, 80, &nodes, &config).expect("Service has an endpoint");
        assert_eq!(endpoint, "node-1.internal:30080");

        // ======= ingress ===========================================================================
        let ingress = mock_kube::get_ingress("web");
        ensure_ingress_available(&ingress).expect("Ingress is available");

        // ======= service account ===================================================================
        let service_account = mock_kube::get_service_account("web", &["web-token-8f2kd"]);
        let secret = service_account_token_secret(&service_account).expect("Token provisioned");
        assert_eq!(secret, "web-token-8f2kd");
    }

    #[test]
    fn web_deployment_not_ready() {
        let config = load_config("");

        let mut pods = vec![mock_kube::get_pod("web-1")];
        pods[0].status.as_mut().unwrap().phase = Some("Pending".to_string());

        let filter = ListParams::default().labels("app=web");
        let errors = vec![
            ensure_pod_count(&pods, &filter, 2).unwrap_err(),
            ensure_pod_available(&pods[0]).unwrap_err(),
            service_endpoint(
                &mock_kube::get_service_with_type("web", "NodePort", &[]),
                80,
                &[],
                &config,
            )
            .unwrap_err(),
            ensure_ingress_available(&mock_kube::get_ingress_with_hostnames("web", &[]))
                .unwrap_err(),
            service_account_token_secret(&mock_kube::get_service_account("web", &[]))
                .unwrap_err(),
        ];

        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Desired number of pods (2) matching filter {labelSelector: app=web} not yet created",
                "Pod web-1 is not available",
                "There are no nodes in the Kubernetes cluster",
                "Ingress web is not available",
                "ServiceAccount web does not have a token yet.",
            ]
        );
        assert_matches!(errors[2], Error::NoNodesInKubernetes);
    }

    #[test]
    fn errors_cross_threads() {
        let error = KubeResourceType::try_from(3).unwrap_err();

        let message = std::thread::spawn(move || error.to_string())
            .join()
            .expect("Thread does not panic");

        assert_eq!(message, "ResourceType ID 3 is unknown");
    }
}
