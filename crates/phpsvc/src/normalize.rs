// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Resolving a request into the settings the builders work from.

use crate::request::{CustomConfig, ServiceRequest};
use crate::template::TemplateDescriptor;
use crate::version::PhpVersion;
use crate::via::{Mechanism, Via};
use crate::Error;

#[cfg(test)]
#[path = "./normalize_test.rs"]
mod normalize_test;

/// A validated request merged with its mechanism template.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedConfig {
    /// Name of the php service.
    pub name: String,
    pub version: PhpVersion,
    pub via: Via,
    pub ssl: bool,
    /// Name of the web-facing role, `nginx` or `apache`.
    pub web: &'static str,
    /// php image tag, e.g. `7.0-fpm`.
    pub image: String,
    pub command: Vec<String>,
    /// Container path of the web server's site config.
    pub server_conf: &'static str,
    pub config: CustomConfig,
}

impl NormalizedConfig {
    pub fn mechanism(&self) -> Mechanism {
        self.via.mechanism
    }
}

/// Fill defaults and resolve the mechanism template for a request.
pub fn normalize(name: &str, request: &ServiceRequest) -> crate::Result<NormalizedConfig> {
    if name.trim().is_empty() {
        return Err(Error::ValidationFailed("service name must not be empty".to_string()));
    }

    let version = match request.version.as_deref() {
        Some(v) => v.parse()?,
        None => PhpVersion::DEFAULT,
    };
    let via = Via::from_optional(request.via.as_deref())?;
    let template = TemplateDescriptor::for_mechanism(via.mechanism);

    tracing::debug!(
        %name,
        %version,
        %via,
        entrypoint = version.supports_entrypoint(),
        "normalized php service"
    );

    Ok(NormalizedConfig {
        name: name.to_string(),
        version,
        ssl: request.ssl,
        web: template.web,
        image: template.image_tag(version),
        command: template.startup_command(version),
        server_conf: template.server_conf,
        config: request.config.clone(),
        via,
    })
}
