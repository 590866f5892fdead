// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for phpsvc operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with phpsvc Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synthesizing service definitions.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Delivery mechanism is not one of the known templates
    #[error("Unsupported delivery mechanism: {0:?}")]
    #[diagnostic(
        code(phpsvc::unsupported_via),
        help("Use one of: nginx, apache (optionally with a variant, e.g. nginx:1.10)")
    )]
    UnsupportedVia(String),

    /// Version is not in the supported list
    #[error("Unsupported php version: {version:?}")]
    #[diagnostic(
        code(phpsvc::unsupported_version),
        help("Supported versions are: {}", supported.join(", "))
    )]
    UnsupportedVersion {
        version: String,
        supported: Vec<String>,
    },

    /// Invalid YAML in a request or host config file
    #[error("Invalid YAML: {error}")]
    #[diagnostic(code(phpsvc::invalid_yaml))]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(phpsvc::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// The proxy builder did not return the requested service
    #[error("Proxy builder for {kind:?} did not produce a service named {name:?}")]
    #[diagnostic(code(phpsvc::missing_proxy_service))]
    MissingProxyService { name: String, kind: String },

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(phpsvc::validation_failed))]
    ValidationFailed(String),

    /// IO error while resolving paths
    #[error(transparent)]
    #[diagnostic(code(phpsvc::io_error))]
    Io(#[from] std::io::Error),
}
