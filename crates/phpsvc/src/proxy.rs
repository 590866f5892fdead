// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Building the reverse proxy that fronts php-fpm.

use indexmap::IndexMap;

use crate::host::HostConfig;
use crate::request::CustomConfig;
use crate::service::{ServiceDefinition, ServiceMapping};
use crate::volume::{add_config, add_script, build_volume, SCRIPTS_MOUNT_DIR};
use crate::Error;

#[cfg(test)]
#[path = "./proxy_test.rs"]
mod proxy_test;

/// Script that generates a self-signed certificate on container start.
pub const ADD_CERT_SCRIPT: &str = "add-cert.sh";

/// Settings handed to a proxy builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    pub ssl: bool,
    /// Config files for the proxy, with defaults already applied.
    pub config: CustomConfig,
}

/// Builds a non-php service from a `family[:variant]` type string.
///
/// The orchestrator normally owns these builders; [`NginxProxyBuilder`] is
/// the stock implementation.
pub trait ProxyBuilder {
    fn build(
        &self,
        name: &str,
        kind: &str,
        config: &ProxyConfig,
        host: &HostConfig,
    ) -> crate::Result<ServiceMapping>;
}

/// Builds plain upstream nginx containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NginxProxyBuilder;

impl NginxProxyBuilder {
    /// Image version used when the type string has no variant.
    pub const DEFAULT_VERSION: &'static str = "stable";

    /// Where nginx reads the default site config.
    pub const SERVER_CONF: &'static str = "/etc/nginx/conf.d/default.conf";
}

impl ProxyBuilder for NginxProxyBuilder {
    fn build(
        &self,
        name: &str,
        kind: &str,
        config: &ProxyConfig,
        host: &HostConfig,
    ) -> crate::Result<ServiceMapping> {
        let (family, variant) = match kind.split_once(':') {
            Some((family, variant)) => (family, Some(variant)),
            None => (kind, None),
        };
        if family != "nginx" {
            return Err(Error::ValidationFailed(format!(
                "nginx builder cannot build services of type '{kind}'"
            )));
        }
        let version = variant
            .filter(|v| !v.is_empty())
            .unwrap_or(Self::DEFAULT_VERSION);

        let mut nginx = ServiceDefinition {
            image: format!("nginx:{version}"),
            environment: IndexMap::from([("TERM".to_string(), "xterm".to_string())]),
            ports: vec!["80".to_string()],
            volumes: Vec::new(),
            command: "nginx -g 'daemon off;'".to_string(),
            networks: None,
        };

        if config.ssl {
            nginx.ports.push("443".to_string());
            nginx.volumes = add_script(ADD_CERT_SCRIPT, &host.engine_scripts_dir, nginx.volumes);
            nginx.command = format!(
                "/bin/sh -c \"{SCRIPTS_MOUNT_DIR}/{ADD_CERT_SCRIPT} && nginx -g 'daemon off;'\""
            );
        }

        if let Some(server) = &config.config.server {
            let mount = build_volume(server, Self::SERVER_CONF, &host.app_root_bind);
            nginx.volumes = add_config(mount, nginx.volumes);
        }

        tracing::debug!(%name, %kind, image = %nginx.image, "built proxy service");
        Ok(IndexMap::from([(name.to_string(), nginx)]))
    }
}
