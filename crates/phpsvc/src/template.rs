// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Per-mechanism defaults for the php container.

use crate::version::PhpVersion;
use crate::via::Mechanism;

/// Wrapper that upstream php images use to set up the container before
/// running the real command.
pub const ENTRYPOINT: &str = "docker-php-entrypoint";

/// Fixed settings for one delivery mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Name of the web-facing role for this mechanism.
    pub web: &'static str,
    pub command: &'static [&'static str],
    /// Suffix of the php image tag, e.g. `fpm` in `7.0-fpm`.
    pub image_suffix: &'static str,
    /// Where the web server reads its site config.
    pub server_conf: &'static str,
}

const NGINX: TemplateDescriptor = TemplateDescriptor {
    web: "nginx",
    command: &["php-fpm"],
    image_suffix: "fpm",
    server_conf: "/etc/nginx/conf.d/default.conf",
};

const APACHE: TemplateDescriptor = TemplateDescriptor {
    web: "apache",
    command: &["apache2-foreground"],
    image_suffix: "apache",
    server_conf: "/etc/apache2/sites-available/000-default.conf",
};

impl TemplateDescriptor {
    pub fn for_mechanism(mechanism: Mechanism) -> &'static Self {
        match mechanism {
            Mechanism::Nginx => &NGINX,
            Mechanism::Apache => &APACHE,
        }
    }

    /// Image tag for a php version, e.g. `7.0-fpm`.
    pub fn image_tag(&self, version: PhpVersion) -> String {
        format!("{}-{}", version, self.image_suffix)
    }

    /// Startup command for a php version, wrapped in the entrypoint when the
    /// image provides one.
    pub fn startup_command(&self, version: PhpVersion) -> Vec<String> {
        let wrapper = version.supports_entrypoint().then_some(ENTRYPOINT);
        wrapper
            .into_iter()
            .chain(self.command.iter().copied())
            .map(String::from)
            .collect()
    }
}
