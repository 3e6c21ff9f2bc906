// Copyright (c) Microsoft. All rights reserved.

#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::default_trait_access,
    clippy::let_unit_value,
    clippy::missing_errors_doc,
    clippy::similar_names,
    clippy::too_many_lines
)]

use std::{fs, io, path::Path};

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    /// Node address types to try, in order, when looking up a node's hostname.
    #[serde(alias = "node-address-types", default = "default_node_address_types")]
    pub node_address_types: Vec<NodeAddressType>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum NodeAddressType {
    #[serde(rename = "ExternalIP")]
    ExternalIp,
    #[serde(rename = "InternalIP")]
    InternalIp,
    Hostname,
    #[serde(rename = "ExternalDNS")]
    ExternalDns,
    #[serde(rename = "InternalDNS")]
    InternalDns,
}

impl NodeAddressType {
    /// Value of the `type` field of a node address.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeAddressType::ExternalIp => "ExternalIP",
            NodeAddressType::InternalIp => "InternalIP",
            NodeAddressType::Hostname => "Hostname",
            NodeAddressType::ExternalDns => "ExternalDNS",
            NodeAddressType::InternalDns => "InternalDNS",
        }
    }
}

fn default_node_address_types() -> Vec<NodeAddressType> {
    vec![NodeAddressType::ExternalIp, NodeAddressType::Hostname]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_address_types: default_node_address_types(),
        }
    }
}

impl Config {
    pub fn load_config(filename: impl AsRef<Path>) -> Result<Config, io::Error> {
        let config = fs::read_to_string(&filename)?;

        let config = toml::from_str(&config)?;

        Ok(config)
    }
}
