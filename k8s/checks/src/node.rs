// Copyright (c) Microsoft. All rights reserved.

use k8s_config::Config;
use k8s_errors::Error;
use k8s_openapi::{api::core::v1::Node, url::Url};
use log::debug;

const AWS_SCHEME: &str = "aws";

/// Parsed `spec.providerID` of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderId {
    /// `aws:///<availability zone>/<instance id>`
    Aws {
        region: String,
        availability_zone: String,
        instance_id: String,
    },
    Other {
        scheme: String,
        id: String,
    },
}

impl ProviderId {
    pub fn from_node(node: &Node) -> Result<Self, Error> {
        let provider_id = node
            .spec
            .as_ref()
            .and_then(|spec| spec.provider_id.as_deref())
            .ok_or_else(|| Error::malformed_node_id(node))?;

        let url = Url::parse(provider_id).map_err(|_| Error::malformed_node_id(node))?;

        if url.scheme() != AWS_SCHEME {
            return Ok(ProviderId::Other {
                scheme: url.scheme().to_string(),
                id: provider_id.to_string(),
            });
        }

        match url.path().split('/').collect::<Vec<_>>().as_slice() {
            ["", availability_zone, instance_id]
                if availability_zone.len() > 1 && !instance_id.is_empty() =>
            {
                let mut region = (*availability_zone).to_string();
                region.pop();

                Ok(ProviderId::Aws {
                    region,
                    availability_zone: (*availability_zone).to_string(),
                    instance_id: (*instance_id).to_string(),
                })
            }
            _ => Err(Error::malformed_node_id(node)),
        }
    }
}

/// Address to reach the node at.
///
/// A non-empty provider ID must parse first. The address is then picked from
/// the node status, trying the configured address types in order.
pub fn node_hostname(node: &Node, config: &Config) -> Result<String, Error> {
    let has_provider_id = node
        .spec
        .as_ref()
        .and_then(|spec| spec.provider_id.as_deref())
        .map_or(false, |provider_id| !provider_id.is_empty());
    if has_provider_id {
        let provider_id = ProviderId::from_node(node)?;
        debug!(
            "Node {:?} has provider ID {:?}",
            node.metadata.name, provider_id
        );
    }

    let addresses = node
        .status
        .as_ref()
        .and_then(|status| status.addresses.as_deref())
        .unwrap_or_default();

    config
        .node_address_types
        .iter()
        .find_map(|address_type| {
            addresses
                .iter()
                .find(|address| address.type_ == address_type.as_str())
        })
        .map(|address| address.address.clone())
        .ok_or_else(|| Error::node_has_no_hostname(node))
}
