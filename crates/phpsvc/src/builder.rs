// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Builders for the php container and its nginx front-end.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::host::{HostConfig, Platform, Sharing};
use crate::normalize::NormalizedConfig;
use crate::proxy::{ProxyBuilder, ProxyConfig, ADD_CERT_SCRIPT};
use crate::request::{ServiceRequest, SharingMapping};
use crate::service::{ServiceDefinition, ServiceNetwork};
use crate::via::Mechanism;
use crate::volume::{add_config, add_script, build_volume};
use crate::Error;

#[cfg(test)]
#[path = "./builder_test.rs"]
mod builder_test;

/// Registry namespace of the php images.
pub const IMAGE_NAMESPACE: &str = "kalabox/php";

/// Document root shared between php and nginx.
pub const WEBROOT: &str = "/var/www/html";

/// Name the php container answers to for nginx's `fastcgi_pass`.
pub const FPM_ALIAS: &str = "fpm";

/// Key of the nginx service in the returned mapping.
pub const NGINX_SERVICE: &str = "nginx";

/// Subdirectory of the engine config dir holding this plugin's files.
pub const CONFIG_SUBDIR: &str = "php";

/// Build the php container.
pub fn build_php(config: &NormalizedConfig, host: &HostConfig) -> ServiceDefinition {
    let mut php = ServiceDefinition {
        image: format!("{IMAGE_NAMESPACE}:{}", config.image),
        environment: IndexMap::from([("TERM".to_string(), "xterm".to_string())]),
        ports: vec!["80".to_string()],
        volumes: Vec::new(),
        command: config.command.join(" "),
        networks: None,
    };

    match config.mechanism() {
        Mechanism::Apache => {
            if config.ssl {
                php.ports.push("443".to_string());

                let ssl_conf = Path::new(CONFIG_SUBDIR).join("httpd-ssl.conf");
                let mount = build_volume(ssl_conf, config.server_conf, &host.engine_config_dir);
                php.volumes = add_config(mount, php.volumes);
                php.volumes = add_script(ADD_CERT_SCRIPT, &host.engine_scripts_dir, php.volumes);
            }
        }
        Mechanism::Nginx => {
            // nginx owns the public ports and reaches php over the network.
            php.ports.clear();
            php.networks = Some(IndexMap::from([(
                "default".to_string(),
                ServiceNetwork {
                    aliases: vec![FPM_ALIAS.to_string()],
                },
            )]));
        }
    }

    php
}

/// The default nginx site config for the given ssl setting.
pub fn default_server_conf(ssl: bool, host: &HostConfig) -> PathBuf {
    let file = if ssl { "default-ssl.conf" } else { "default.conf" };
    host.engine_config_dir.join(CONFIG_SUBDIR).join(file)
}

/// Proxy settings for a php service: the request's config files with the
/// default site config filled in.
pub fn proxy_config(config: &NormalizedConfig, host: &HostConfig) -> ProxyConfig {
    let mut files = config.config.clone();
    if files.server.is_none() {
        files.server = Some(default_server_conf(config.ssl, host));
    }
    ProxyConfig {
        ssl: config.ssl,
        config: files,
    }
}

/// Whether nginx mounts the php volume directly instead of receiving its
/// own sharing settings.
pub fn mounts_php_volume(host: &HostConfig) -> bool {
    host.platform == Platform::Darwin || host.sharing != Sharing::On
}

/// Build the nginx container that fronts a php-fpm service.
pub fn build_nginx(
    config: &NormalizedConfig,
    host: &HostConfig,
    proxy: &dyn ProxyBuilder,
) -> crate::Result<ServiceDefinition> {
    let kind = config.via.proxy_type();
    let proxy_config = proxy_config(config, host);

    let mut services = proxy.build(&config.name, &kind, &proxy_config, host)?;
    let mut nginx = services
        .shift_remove(&config.name)
        .ok_or_else(|| Error::MissingProxyService {
            name: config.name.clone(),
            kind: kind.clone(),
        })?;

    if mounts_php_volume(host) {
        nginx.volumes.push(format!("{}:{WEBROOT}", config.name));
    }

    Ok(nginx)
}

/// Sharing settings after accounting for the nginx front-end.
///
/// When nginx cannot simply mount the php volume, it needs the same host
/// sharing as php so both containers see the same files.
pub fn plan_sharing(
    name: &str,
    request: &ServiceRequest,
    config: &NormalizedConfig,
    host: &HostConfig,
) -> SharingMapping {
    let mut sharing = request.sharing.clone();
    if config.mechanism() != Mechanism::Nginx || mounts_php_volume(host) {
        return sharing;
    }
    if let Some(spec) = request.sharing.get(name).filter(|s| !s.is_empty()) {
        tracing::debug!(%name, "sharing php files with nginx");
        sharing.insert(NGINX_SERVICE.to_string(), spec.clone());
    }
    sharing
}
