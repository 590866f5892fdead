// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `phpsvc services` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;
use serde::Serialize;

use crate::{Format, HostFlags};

#[cfg(test)]
#[path = "./cmd_services_test.rs"]
mod cmd_services_test;

/// Render the compose services for a php service
#[derive(Debug, Args)]
pub struct CmdServices {
    /// YAML file describing the php service
    request: PathBuf,

    /// Name of the php service
    #[clap(short, long, default_value = "appserver")]
    name: String,

    /// Output format
    #[clap(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Also include the sharing settings each service needs
    #[clap(long)]
    sharing_plan: bool,

    #[clap(flatten)]
    host: HostFlags,
}

#[derive(Serialize)]
struct Rendered<'a> {
    #[serde(flatten)]
    fragment: &'a phpsvc::ComposeFragment,

    #[serde(skip_serializing_if = "Option::is_none")]
    sharing: Option<phpsvc::SharingMapping>,
}

impl CmdServices {
    pub fn run(&mut self) -> Result<i32> {
        println!("{}", self.render()?);
        Ok(0)
    }

    fn render(&self) -> Result<String> {
        let request = phpsvc::ServiceRequest::load(&self.request)?;
        let plugin = phpsvc::PhpService::new(self.host.host_config()?);

        let fragment = plugin.compose(&self.name, &request)?;
        let sharing = if self.sharing_plan {
            Some(plugin.sharing(&self.name, &request)?)
        } else {
            None
        };

        self.format.render(&Rendered {
            fragment: &fragment,
            sharing,
        })
    }
}
