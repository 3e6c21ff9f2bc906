// Copyright (c) Microsoft. All rights reserved.

use k8s_errors::{describe_filter, Error};
use k8s_openapi::api::core::v1::Pod;
use kube::api::ListParams;
use log::debug;

const POD_PHASE_RUNNING: &str = "Running";

/// A pod is available when it is running and every container is ready.
/// A container explicitly reported as not started keeps the pod unavailable.
pub fn ensure_pod_available(pod: &Pod) -> Result<(), Error> {
    let status = pod.status.as_ref();

    let containers_ready = status
        .and_then(|status| status.container_statuses.as_ref())
        .map_or(true, |container_statuses| {
            container_statuses
                .iter()
                .all(|container| container.ready && container.started != Some(false))
        });
    let running = status.and_then(|status| status.phase.as_deref()) == Some(POD_PHASE_RUNNING);

    debug!(
        "Pod {:?} running: {}, containers ready: {}",
        pod.metadata.name, running, containers_ready
    );

    if running && containers_ready {
        Ok(())
    } else {
        Err(Error::pod_not_available(pod))
    }
}

/// Checks that `filter` matched exactly `desired_count` pods.
pub fn ensure_pod_count(
    pods: &[Pod],
    filter: &ListParams,
    desired_count: usize,
) -> Result<(), Error> {
    debug!(
        "Found {} pods matching {}, want {}",
        pods.len(),
        describe_filter(filter),
        desired_count
    );

    if pods.len() == desired_count {
        Ok(())
    } else {
        Err(Error::desired_number_of_pods_not_created(
            filter,
            desired_count,
        ))
    }
}
