// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! phpsvc - PHP Appserver Service Definition CLI

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

mod cmd_info;
mod cmd_services;
mod cmd_versions;

use cmd_info::CmdInfo;
use cmd_services::CmdServices;
use cmd_versions::CmdVersions;

#[derive(Parser)]
#[clap(
    name = "phpsvc",
    about = "PHP Appserver Service Definitions",
    version,
    long_about = "Render the container services needed to run a php appserver"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Parser, Clone, Debug, Default)]
pub struct HostFlags {
    /// Load host settings from a YAML file
    #[clap(long = "host-config", env = "PHPSVC_HOST_CONFIG")]
    pub host_config: Option<PathBuf>,

    /// Host file sharing mode (ON or OFF)
    #[clap(long, env = "PHPSVC_SHARING")]
    pub sharing: Option<String>,

    /// Platform running the containers (darwin, linux, windows)
    #[clap(long, env = "PHPSVC_PLATFORM")]
    pub platform: Option<String>,

    /// Variable custom config paths are resolved against
    #[clap(long = "app-root-bind", env = "PHPSVC_APP_ROOT_BIND")]
    pub app_root_bind: Option<String>,
}

impl HostFlags {
    /// Resolve host settings from the config file or the current machine,
    /// then apply any overrides.
    pub fn host_config(&self) -> Result<phpsvc::HostConfig> {
        let mut host = match &self.host_config {
            Some(path) => phpsvc::HostConfig::load(path)?,
            None => phpsvc::HostConfig::detect()?,
        };

        if let Some(sharing) = &self.sharing {
            host.sharing = sharing.parse()?;
        }
        if let Some(platform) = &self.platform {
            host.platform = platform.parse()?;
        }
        if let Some(bind) = &self.app_root_bind {
            host.app_root_bind = bind.clone();
        }

        tracing::debug!(?host, "using host config");
        Ok(host)
    }
}

/// Output format for rendered documents.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    pub fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        match self {
            Self::Yaml => serde_yaml::to_string(value).into_diagnostic(),
            Self::Json => serde_json::to_string_pretty(value).into_diagnostic(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Render the compose services for a php service
    Services(CmdServices),

    /// Summarize the services a php service expands to
    Info(CmdInfo),

    /// List supported php versions
    Versions(CmdVersions),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        match self.cmd {
            Command::Services(mut cmd) => cmd.run(),
            Command::Info(mut cmd) => cmd.run(),
            Command::Versions(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
