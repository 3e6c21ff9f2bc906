// Copyright (c) Microsoft. All rights reserved.

use k8s_config::Config;
use k8s_errors::Error;
use k8s_openapi::api::core::v1::{Node, Service, ServicePort};
use log::debug;

use crate::node::node_hostname;

const SERVICE_TYPE_CLUSTER_IP: &str = "ClusterIP";
const SERVICE_TYPE_NODE_PORT: &str = "NodePort";
const SERVICE_TYPE_LOAD_BALANCER: &str = "LoadBalancer";

// Kubernetes defaults an unset service type to ClusterIP.
fn service_type(service: &Service) -> &str {
    service
        .spec
        .as_ref()
        .and_then(|spec| spec.type_.as_deref())
        .unwrap_or(SERVICE_TYPE_CLUSTER_IP)
}

fn find_service_port(service: &Service, port: i32) -> Result<&ServicePort, Error> {
    service
        .spec
        .as_ref()
        .and_then(|spec| spec.ports.as_ref())
        .and_then(|ports| ports.iter().find(|service_port| service_port.port == port))
        .ok_or_else(|| Error::unknown_service_port(service, port))
}

/// `LoadBalancer` services are available once the load balancer reports an
/// endpoint. Every other service type is available as soon as it exists.
pub fn ensure_service_available(service: &Service) -> Result<(), Error> {
    let available = service_type(service) != SERVICE_TYPE_LOAD_BALANCER
        || crate::has_load_balancer_ingress(
            service
                .status
                .as_ref()
                .and_then(|status| status.load_balancer.as_ref()),
        );

    debug!(
        "Service {:?} available: {}",
        service.metadata.name, available
    );

    if available {
        Ok(())
    } else {
        Err(Error::service_not_available(service))
    }
}

/// Node port bound to the service port `port`.
pub fn find_node_port(service: &Service, port: i32) -> Result<i32, Error> {
    find_service_port(service, port)?
        .node_port
        .ok_or_else(|| Error::unknown_service_port(service, port))
}

/// `host:port` endpoint to reach `port` of the service from outside the
/// cluster network, or from inside it for `ClusterIP` services.
///
/// `NodePort` services are reached through the first of `nodes`.
pub fn service_endpoint(
    service: &Service,
    port: i32,
    nodes: &[Node],
    config: &Config,
) -> Result<String, Error> {
    let endpoint = match service_type(service) {
        SERVICE_TYPE_CLUSTER_IP => {
            find_service_port(service, port)?;
            let cluster_ip = service
                .spec
                .as_ref()
                .and_then(|spec| spec.cluster_ip.as_deref())
                .unwrap_or_default();

            format!("{}:{}", cluster_ip, port)
        }
        SERVICE_TYPE_NODE_PORT => {
            let node_port = find_node_port(service, port)?;
            let node = nodes.first().ok_or_else(Error::no_nodes_in_kubernetes)?;
            let hostname = node_hostname(node, config)?;

            format!("{}:{}", hostname, node_port)
        }
        SERVICE_TYPE_LOAD_BALANCER => {
            find_service_port(service, port)?;
            let ingress = service
                .status
                .as_ref()
                .and_then(|status| status.load_balancer.as_ref())
                .and_then(|load_balancer| load_balancer.ingress.as_ref())
                .and_then(|ingress| ingress.first())
                .ok_or_else(|| Error::service_not_available(service))?;
            let host = ingress
                .hostname
                .as_deref()
                .filter(|hostname| !hostname.is_empty())
                .or(ingress.ip.as_deref())
                .ok_or_else(|| Error::service_not_available(service))?;

            format!("{}:{}", host, port)
        }
        _ => return Err(Error::unknown_service_type(service)),
    };

    debug!(
        "Service {:?} port {} reachable at {}",
        service.metadata.name, port, endpoint
    );

    Ok(endpoint)
}
