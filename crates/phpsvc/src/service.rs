// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Compose-style service, volume and network definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Services keyed by name, in the order they were built.
pub type ServiceMapping = IndexMap<String, ServiceDefinition>;

/// Top-level named volumes.
pub type VolumeMapping = IndexMap<String, VolumeDefinition>;

/// Top-level networks.
pub type NetworkMapping = IndexMap<String, NetworkDefinition>;

/// One container in the compose file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub image: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub environment: IndexMap<String, String>,

    /// Container ports to publish, as strings (`"80"`).
    #[serde(default)]
    pub ports: Vec<String>,

    /// Volume specs, `local:remote`.
    #[serde(default)]
    pub volumes: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<IndexMap<String, ServiceNetwork>>,
}

impl ServiceDefinition {
    /// Aliases this service answers to on the given network.
    pub fn aliases(&self, network: &str) -> &[String] {
        self.networks
            .as_ref()
            .and_then(|n| n.get(network))
            .map(|n| n.aliases.as_slice())
            .unwrap_or_default()
    }
}

/// Per-service network attachment.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceNetwork {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// A named volume with engine defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct VolumeDefinition {}

/// A network with engine defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NetworkDefinition {}

/// Display metadata about a php service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub via: String,
}

/// A complete compose fragment for one php service.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ComposeFragment {
    pub services: ServiceMapping,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub volumes: VolumeMapping,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub networks: NetworkMapping,
}
