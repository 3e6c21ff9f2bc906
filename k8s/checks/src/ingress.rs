// Copyright (c) Microsoft. All rights reserved.

use k8s_errors::Error;
use k8s_openapi::api::networking::v1::Ingress;
use log::debug;

/// An ingress is available once its load balancer reports an endpoint.
pub fn ensure_ingress_available(ingress: &Ingress) -> Result<(), Error> {
    let available = crate::has_load_balancer_ingress(
        ingress
            .status
            .as_ref()
            .and_then(|status| status.load_balancer.as_ref()),
    );

    debug!(
        "Ingress {:?} available: {}",
        ingress.metadata.name, available
    );

    if available {
        Ok(())
    } else {
        Err(Error::ingress_not_available(ingress))
    }
}
