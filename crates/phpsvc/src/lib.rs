// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! phpsvc - Container services for PHP appservers
//!
//! This crate turns a short php service description into the compose
//! service definitions needed to run it: the php container itself and,
//! when delivered via nginx, an nginx container in front of it.
//!
//! # Example
//!
//! ```yaml
//! # appserver
//! version: "7.0"
//!
//! # nginx (default) or apache, optionally with a variant: nginx:1.10
//! via: nginx
//! ssl: true
//!
//! # Custom config files, relative to the app root
//! config:
//!   server: config/nginx.conf
//!   conf: config/php.ini
//! ```
//!
//! ```no_run
//! let host = phpsvc::HostConfig::detect()?;
//! let request = phpsvc::ServiceRequest::load("appserver.yaml")?;
//! let services = phpsvc::PhpService::new(host).services("appserver", &request)?;
//! assert!(services.contains_key("nginx"));
//! # Ok::<(), phpsvc::Error>(())
//! ```

pub mod builder;
pub mod error;
pub mod host;
pub mod inject;
pub mod normalize;
pub mod plugin;
pub mod proxy;
pub mod request;
pub mod service;
pub mod template;
pub mod version;
pub mod via;
pub mod volume;

pub use error::{Error, Result};
pub use host::{HostConfig, Platform, Sharing};
pub use normalize::{normalize, NormalizedConfig};
pub use plugin::{config_dir, info, networks, scripts_dir, synthesize, volumes, PhpService};
pub use proxy::{NginxProxyBuilder, ProxyBuilder, ProxyConfig};
pub use request::{CustomConfig, ServiceRequest, SharingMapping, SharingSpec};
pub use service::{
    ComposeFragment, ServiceDefinition, ServiceInfo, ServiceMapping, ServiceNetwork,
};
pub use template::TemplateDescriptor;
pub use version::{PhpVersion, VERSIONS};
pub use via::{Mechanism, Via};
