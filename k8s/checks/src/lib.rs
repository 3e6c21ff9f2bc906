// Copyright (c) Microsoft. All rights reserved.

//! Checks over Kubernetes objects the caller has already fetched.
//!
//! None of these talk to the cluster, sleep or retry. Each one returns the
//! matching [`k8s_errors::Error`] when the object is not in the expected state,
//! leaving the decision to poll again to the caller.

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

pub mod ingress;
pub mod node;
pub mod pod;
pub mod service;
pub mod service_account;

pub use ingress::ensure_ingress_available;
pub use node::{node_hostname, ProviderId};
pub use pod::{ensure_pod_available, ensure_pod_count};
pub use service::{ensure_service_available, find_node_port, service_endpoint};
pub use service_account::service_account_token_secret;

use k8s_openapi::api::core::v1::LoadBalancerStatus;

fn has_load_balancer_ingress(status: Option<&LoadBalancerStatus>) -> bool {
    status
        .and_then(|status| status.ingress.as_ref())
        .map_or(false, |ingress| !ingress.is_empty())
}
