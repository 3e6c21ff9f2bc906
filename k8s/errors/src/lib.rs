// Copyright (c) Microsoft. All rights reserved.

//! Well-known failure conditions raised by the Kubernetes test helpers.
//!
//! Every variant keeps a copy of the object it was raised for, so callers can
//! inspect it after the fact. Which variant was raised is the only signal
//! callers should branch on; the rendered message is for humans.

#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::default_trait_access,
    clippy::let_unit_value,
    clippy::missing_errors_doc,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::module_name_repetitions
)]

pub mod resource_type;

use k8s_openapi::api::{
    core::v1::{Node, Pod, Service},
    networking::v1::Ingress,
};
use kube::{api::ListParams, core::ObjectMeta, Resource};
use thiserror::Error;

pub use resource_type::KubeResourceType;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Ingress {} is not available", object_name(.ingress.meta()))]
    IngressNotAvailable { ingress: Box<Ingress> },
    #[error("ResourceType ID {resource_type} is unknown")]
    UnknownKubeResourceType { resource_type: i32 },
    #[error(
        "Desired number of pods ({desired_count}) matching filter {} not yet created",
        describe_filter(.filter)
    )]
    DesiredNumberOfPodsNotCreated {
        filter: ListParams,
        desired_count: usize,
    },
    #[error("ServiceAccount {name} does not have a token yet.")]
    ServiceAccountTokenNotAvailable { name: String },
    #[error("Pod {} is not available", object_name(.pod.meta()))]
    PodNotAvailable { pod: Box<Pod> },
    #[error("Service {} is not available", object_name(.service.meta()))]
    ServiceNotAvailable { service: Box<Service> },
    #[error("Service {} has an unknown service type", object_name(.service.meta()))]
    UnknownServiceType { service: Box<Service> },
    #[error("Port {port} is not a part of the service {}", object_name(.service.meta()))]
    UnknownServicePort { service: Box<Service>, port: i32 },
    #[error("There are no nodes in the Kubernetes cluster")]
    NoNodesInKubernetes,
    #[error("Node {} has no hostname", object_name(.node.meta()))]
    NodeHasNoHostname { node: Box<Node> },
    #[error("Node {} has malformed ID {}", object_name(.node.meta()), provider_id(.node))]
    MalformedNodeID { node: Box<Node> },
}

impl Error {
    #[must_use]
    pub fn ingress_not_available(ingress: &Ingress) -> Self {
        Error::IngressNotAvailable {
            ingress: Box::new(ingress.clone()),
        }
    }

    #[must_use]
    pub fn unknown_kube_resource_type(resource_type: i32) -> Self {
        Error::UnknownKubeResourceType { resource_type }
    }

    #[must_use]
    pub fn desired_number_of_pods_not_created(filter: &ListParams, desired_count: usize) -> Self {
        Error::DesiredNumberOfPodsNotCreated {
            filter: filter.clone(),
            desired_count,
        }
    }

    #[must_use]
    pub fn service_account_token_not_available(name: impl Into<String>) -> Self {
        Error::ServiceAccountTokenNotAvailable { name: name.into() }
    }

    /// Raised when Kubernetes does not yet consider the pod available.
    #[must_use]
    pub fn pod_not_available(pod: &Pod) -> Self {
        Error::PodNotAvailable {
            pod: Box::new(pod.clone()),
        }
    }

    #[must_use]
    pub fn service_not_available(service: &Service) -> Self {
        Error::ServiceNotAvailable {
            service: Box::new(service.clone()),
        }
    }

    /// Raised for service types the helpers do not know how to reach.
    #[must_use]
    pub fn unknown_service_type(service: &Service) -> Self {
        Error::UnknownServiceType {
            service: Box::new(service.clone()),
        }
    }

    #[must_use]
    pub fn unknown_service_port(service: &Service, port: i32) -> Self {
        Error::UnknownServicePort {
            service: Box::new(service.clone()),
            port,
        }
    }

    #[must_use]
    pub fn no_nodes_in_kubernetes() -> Self {
        Error::NoNodesInKubernetes
    }

    #[must_use]
    pub fn node_has_no_hostname(node: &Node) -> Self {
        Error::NodeHasNoHostname {
            node: Box::new(node.clone()),
        }
    }

    /// Raised when the node's provider ID does not follow its scheme.
    #[must_use]
    pub fn malformed_node_id(node: &Node) -> Self {
        Error::MalformedNodeID {
            node: Box::new(node.clone()),
        }
    }
}

fn object_name(meta: &ObjectMeta) -> &str {
    meta.name.as_deref().unwrap_or_default()
}

fn provider_id(node: &Node) -> &str {
    node.spec
        .as_ref()
        .and_then(|spec| spec.provider_id.as_deref())
        .unwrap_or_default()
}

/// Renders a pod filter as `{labelSelector: .., fieldSelector: ..}`.
/// Only the selectors that are set are listed.
#[must_use]
pub fn describe_filter(filter: &ListParams) -> String {
    let selectors = [
        ("labelSelector", &filter.label_selector),
        ("fieldSelector", &filter.field_selector),
    ];

    let selectors = selectors
        .iter()
        .filter_map(|(key, selector)| {
            selector
                .as_deref()
                .map(|selector| format!("{}: {}", key, selector))
        })
        .collect::<Vec<_>>();

    format!("{{{}}}", selectors.join(", "))
}
