// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Host-level settings that shape the generated services.
//!
//! These come from the orchestrator's own configuration and the machine
//! it runs on. They are passed into every synthesis call rather than read
//! from the process, so the same request always renders the same way for
//! the same host.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "./host_test.rs"]
mod host_test;

/// Bind variable the engine expands to the application root.
pub const DEFAULT_APP_ROOT_BIND: &str = "$LANDO_APP_ROOT_BIND";

/// Directory under the user's home holding orchestrator state.
pub const USER_CONF_DIRNAME: &str = ".lando";

/// Host file sharing mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Sharing {
    #[serde(rename = "ON", alias = "on")]
    On,
    #[default]
    #[serde(rename = "OFF", alias = "off")]
    Off,
}

impl std::str::FromStr for Sharing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            _ => Err(Error::ValidationFailed(format!(
                "Invalid sharing mode '{s}', expected ON or OFF"
            ))),
        }
    }
}

/// Operating system of the machine running the containers.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
    Other,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name onto a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Self::Darwin,
            "linux" => Self::Linux,
            "windows" | "win32" => Self::Windows,
            _ => Self::Other,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl std::str::FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macos" | "darwin" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            "windows" | "win32" => Ok(Self::Windows),
            "other" => Ok(Self::Other),
            _ => Err(Error::ValidationFailed(format!(
                "Invalid platform '{s}', expected darwin, linux, windows or other"
            ))),
        }
    }
}

/// Settings supplied by the host orchestrator.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostConfig {
    /// Directory holding per-service default config files (`<dir>/php/...`).
    pub engine_config_dir: PathBuf,

    /// Directory holding helper scripts mounted under `/scripts`.
    pub engine_scripts_dir: PathBuf,

    /// Whether host file sharing is enabled.
    pub sharing: Sharing,

    pub platform: Platform,

    /// Variable that custom config paths are resolved against.
    pub app_root_bind: String,
}

impl HostConfig {
    /// Host settings rooted at the given user config directory.
    pub fn with_root<P: AsRef<Path>>(user_conf_root: P) -> Self {
        let root = user_conf_root.as_ref();
        Self {
            engine_config_dir: root.join("services").join("config"),
            engine_scripts_dir: root.join("scripts"),
            sharing: Sharing::default(),
            platform: Platform::current(),
            app_root_bind: DEFAULT_APP_ROOT_BIND.to_string(),
        }
    }

    /// Host settings for the current user and machine.
    pub fn detect() -> crate::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            Error::ValidationFailed("Cannot resolve user config root without HOME".to_string())
        })?;
        Ok(Self::with_root(home.join(USER_CONF_DIRNAME)))
    }

    /// Parse host settings from YAML. Missing fields take their defaults.
    ///
    /// A leading `~/` is expanded to the user's home. Other relative
    /// directories are rejected.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let mut config = Self::parse(yaml)?;
        config.engine_config_dir = expand_home(&config.engine_config_dir)?;
        config.engine_scripts_dir = expand_home(&config.engine_scripts_dir)?;
        for dir in [&config.engine_config_dir, &config.engine_scripts_dir] {
            if !dir.is_absolute() {
                return Err(Error::ValidationFailed(format!(
                    "Engine directory {dir:?} must be absolute"
                )));
            }
        }
        Ok(config)
    }

    fn parse<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();
        serde_yaml::from_str(&yaml).map_err(|e| Error::InvalidYaml {
            error: e,
            yaml_content: yaml,
        })
    }

    /// Load host settings from a YAML file.
    ///
    /// Relative directories are resolved against the file's directory and
    /// a leading `~/` against the user's home.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let mut config = Self::parse(yaml)?;
        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let base_dir = std::path::absolute(base_dir)?;
        config.engine_config_dir = resolve_dir(&config.engine_config_dir, &base_dir)?;
        config.engine_scripts_dir = resolve_dir(&config.engine_scripts_dir, &base_dir)?;
        tracing::debug!(?path, ?config, "loaded host config");
        Ok(config)
    }
}

impl Default for HostConfig {
    /// Same as [`HostConfig::detect`], rooted in the temp dir when there
    /// is no home directory.
    fn default() -> Self {
        Self::detect()
            .unwrap_or_else(|_| Self::with_root(std::env::temp_dir().join(USER_CONF_DIRNAME)))
    }
}

fn expand_home(dir: &Path) -> crate::Result<PathBuf> {
    match dir.strip_prefix("~") {
        Ok(rel) => {
            let home = dirs::home_dir().ok_or_else(|| {
                Error::ValidationFailed("Cannot resolve ~ without HOME".to_string())
            })?;
            Ok(home.join(rel))
        }
        Err(_) => Ok(dir.to_path_buf()),
    }
}

fn resolve_dir(dir: &Path, base_dir: &Path) -> crate::Result<PathBuf> {
    let dir = expand_home(dir)?;
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(base_dir.join(dir))
    }
}
