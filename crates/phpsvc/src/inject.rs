// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Mounting user supplied config files over the image defaults.

use std::path::Path;

use crate::builder::NGINX_SERVICE;
use crate::host::HostConfig;
use crate::request::CustomConfig;
use crate::service::ServiceMapping;
use crate::via::Mechanism;
use crate::volume::{add_config, build_volume};

#[cfg(test)]
#[path = "./inject_test.rs"]
mod inject_test;

/// Container path of php.ini.
pub const PHP_INI: &str = "/usr/local/etc/php/php.ini";

/// A config file that users may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTarget {
    /// The web server site config.
    Server,
    /// php.ini
    Conf,
}

impl ConfigTarget {
    pub const ALL: [Self; 2] = [Self::Server, Self::Conf];

    /// Key under `config:` in the request.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Conf => "conf",
        }
    }

    fn local<'a>(&self, config: &'a CustomConfig) -> Option<&'a Path> {
        match self {
            Self::Server => config.server.as_deref(),
            Self::Conf => config.conf.as_deref(),
        }
    }
}

/// Add a volume for every custom config file to the service that reads it.
///
/// Site config belongs to the web-facing service (`nginx`, or the php
/// service itself under apache). php.ini always belongs to php.
pub fn inject_custom_config(
    services: &mut ServiceMapping,
    name: &str,
    mechanism: Mechanism,
    server_conf: &str,
    config: &CustomConfig,
    host: &HostConfig,
) {
    let web = match mechanism {
        Mechanism::Nginx => NGINX_SERVICE,
        Mechanism::Apache => name,
    };

    for target in ConfigTarget::ALL {
        let Some(local) = target.local(config) else {
            continue;
        };
        let (owner, remote) = match target {
            ConfigTarget::Server => (web, server_conf),
            ConfigTarget::Conf => (name, PHP_INI),
        };
        let Some(service) = services.get_mut(owner) else {
            tracing::warn!(%owner, key = target.key(), "no service to mount custom config into");
            continue;
        };

        let mount = build_volume(local, remote, &host.app_root_bind);
        tracing::debug!(%owner, %mount, "mounting custom config");
        service.volumes = add_config(mount, std::mem::take(&mut service.volumes));
    }
}
