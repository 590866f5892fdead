// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! The user-facing php service description.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "./request_test.rs"]
mod request_test;

/// Opaque host file sharing settings for one service.
pub type SharingSpec = serde_yaml::Mapping;

/// Sharing settings keyed by service name.
pub type SharingMapping = IndexMap<String, SharingSpec>;

/// Custom config files, relative to the app root unless absolute.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CustomConfig {
    /// Web server config (nginx vhost or apache site).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<PathBuf>,

    /// php.ini
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf: Option<PathBuf>,
}

/// A php service as written in the app's config file.
///
/// ```yaml
/// version: "7.0"
/// via: nginx:1.10
/// ssl: true
/// config:
///   server: config/nginx.conf
///   conf: config/php.ini
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceRequest {
    /// php version, `7.0` when omitted.
    #[serde(
        default,
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    /// Delivery mechanism, `mechanism[:variant]`. nginx when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,

    #[serde(default)]
    pub ssl: bool,

    #[serde(default)]
    pub config: CustomConfig,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub sharing: SharingMapping,
}

impl ServiceRequest {
    pub fn new<S: Into<String>>(version: S, via: S, ssl: bool) -> Self {
        Self {
            version: Some(version.into()),
            via: Some(via.into()),
            ssl,
            ..Default::default()
        }
    }

    /// Parse a request from YAML string.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();
        serde_yaml::from_str(&yaml).map_err(|e| Error::InvalidYaml {
            error: e,
            yaml_content: yaml,
        })
    }

    /// Load a request from file path.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;
        Self::from_yaml(yaml)
    }
}

/// Accept `version: 7.0` as well as `version: "7.0"`.
///
/// An unquoted `7.0` is a YAML float, which would otherwise lose its
/// trailing zero.
fn deserialize_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    let version = match value {
        None | Some(serde_yaml::Value::Null) => None,
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(match (n.as_u64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 => format!("{f:.1}"),
            _ => n.to_string(),
        }),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a version string, found {other:?}"
            )));
        }
    };
    Ok(version)
}
