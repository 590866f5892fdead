// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! The php service plugin as seen by the orchestrator.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::builder::{build_nginx, build_php, plan_sharing, proxy_config, NGINX_SERVICE};
use crate::host::HostConfig;
use crate::inject::inject_custom_config;
use crate::normalize::normalize;
use crate::proxy::{NginxProxyBuilder, ProxyBuilder};
use crate::request::{ServiceRequest, SharingMapping};
use crate::service::{
    ComposeFragment, NetworkMapping, ServiceInfo, ServiceMapping, VolumeDefinition, VolumeMapping,
};
use crate::version::{PhpVersion, VERSIONS};
use crate::via::{Mechanism, Via};
use crate::Error;

#[cfg(test)]
#[path = "./plugin_test.rs"]
mod plugin_test;

/// Name of the shared data volume.
pub const DATA_VOLUME: &str = "data";

/// Build every service needed to run php under `name`.
///
/// The php container is keyed by `name`; nginx delivery adds an `nginx`
/// service in front of it.
pub fn synthesize(
    name: &str,
    request: &ServiceRequest,
    host: &HostConfig,
    proxy: &dyn ProxyBuilder,
) -> crate::Result<ServiceMapping> {
    let config = normalize(name, request)?;
    if config.mechanism() == Mechanism::Nginx && name == NGINX_SERVICE {
        return Err(Error::ValidationFailed(format!(
            "a php service delivered via nginx cannot itself be named '{NGINX_SERVICE}'"
        )));
    }

    let mut services = ServiceMapping::new();
    services.insert(name.to_string(), build_php(&config, host));

    // nginx reads the default site config as if it were a custom one, so
    // it flows through the same injection below.
    let mut files = config.config.clone();
    if config.mechanism() == Mechanism::Nginx {
        let nginx = build_nginx(&config, host, proxy)?;
        services.insert(NGINX_SERVICE.to_string(), nginx);
        files = proxy_config(&config, host).config;
    }

    inject_custom_config(
        &mut services,
        name,
        config.mechanism(),
        config.server_conf,
        &files,
        host,
    );

    tracing::info!(
        %name,
        via = %config.via,
        services = services.len(),
        "synthesized php services"
    );
    Ok(services)
}

/// Networks needed by a php service.
pub fn networks(_name: &str) -> NetworkMapping {
    NetworkMapping::new()
}

/// Named volumes needed by a php service.
pub fn volumes(name: &str) -> VolumeMapping {
    IndexMap::from([
        (DATA_VOLUME.to_string(), VolumeDefinition::default()),
        (name.to_string(), VolumeDefinition::default()),
    ])
}

/// Display metadata for a php service.
pub fn info(_name: &str, request: &ServiceRequest) -> ServiceInfo {
    let via = match &request.via {
        Some(via) => via.clone(),
        None => Via::new(Mechanism::DEFAULT).to_string(),
    };
    ServiceInfo { via }
}

/// Directory holding the bundled default config files (`php/...`).
///
/// The orchestrator copies these into [`HostConfig::engine_config_dir`].
pub fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config")
}

/// Directory holding the bundled helper scripts.
pub fn scripts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts")
}

/// The php plugin bound to one host.
pub struct PhpService {
    host: HostConfig,
    proxy: Box<dyn ProxyBuilder>,
}

impl PhpService {
    /// A plugin using the stock nginx builder.
    pub fn new(host: HostConfig) -> Self {
        Self::with_proxy(host, NginxProxyBuilder)
    }

    pub fn with_proxy<B: ProxyBuilder + 'static>(host: HostConfig, proxy: B) -> Self {
        Self {
            host,
            proxy: Box::new(proxy),
        }
    }

    pub fn host(&self) -> &HostConfig {
        &self.host
    }

    /// Supported php versions.
    pub fn versions(&self) -> &'static [PhpVersion] {
        &VERSIONS
    }

    pub fn config_dir(&self) -> PathBuf {
        config_dir()
    }

    pub fn services(&self, name: &str, request: &ServiceRequest) -> crate::Result<ServiceMapping> {
        synthesize(name, request, &self.host, self.proxy.as_ref())
    }

    pub fn networks(&self, name: &str) -> NetworkMapping {
        networks(name)
    }

    pub fn volumes(&self, name: &str) -> VolumeMapping {
        volumes(name)
    }

    pub fn info(&self, name: &str, request: &ServiceRequest) -> ServiceInfo {
        info(name, request)
    }

    /// Sharing settings for all services, including any that nginx needs.
    pub fn sharing(
        &self,
        name: &str,
        request: &ServiceRequest,
    ) -> crate::Result<SharingMapping> {
        let config = normalize(name, request)?;
        Ok(plan_sharing(name, request, &config, &self.host))
    }

    /// Everything the compose file needs for this service.
    pub fn compose(&self, name: &str, request: &ServiceRequest) -> crate::Result<ComposeFragment> {
        Ok(ComposeFragment {
            services: self.services(name, request)?,
            volumes: self.volumes(name),
            networks: self.networks(name),
        })
    }
}
