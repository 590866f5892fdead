// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `phpsvc info` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

use crate::HostFlags;

#[cfg(test)]
#[path = "./cmd_info_test.rs"]
mod cmd_info_test;

/// Summarize the services a php service expands to
#[derive(Debug, Args)]
pub struct CmdInfo {
    /// YAML file describing the php service
    request: PathBuf,

    /// Name of the php service
    #[clap(short, long, default_value = "appserver")]
    name: String,

    /// Also list volumes of each service
    #[clap(long)]
    volumes: bool,

    #[clap(flatten)]
    host: HostFlags,
}

impl CmdInfo {
    pub fn run(&mut self) -> Result<i32> {
        println!("{}", self.render()?);
        Ok(0)
    }

    fn render(&self) -> Result<String> {
        let request = phpsvc::ServiceRequest::load(&self.request)?;
        let plugin = phpsvc::PhpService::new(self.host.host_config()?);

        let info = plugin.info(&self.name, &request);
        let services = plugin.services(&self.name, &request)?;

        let mut lines = vec![
            format!("{} {}", self.name.bold(), format!("via {}", info.via).dimmed()),
            String::new(),
        ];

        for (name, service) in &services {
            let ports = if service.ports.is_empty() {
                "(no ports)".to_string()
            } else {
                service.ports.join(", ")
            };
            lines.push(format!("  {} {}", name.cyan(), service.image.green()));
            lines.push(format!("     ports: {}", ports.yellow()));
            lines.push(format!("     command: {}", service.command.dimmed()));

            let aliases = service.aliases("default");
            if !aliases.is_empty() {
                lines.push(format!("     aliases: {}", aliases.join(", ").blue()));
            }

            if self.volumes {
                for volume in &service.volumes {
                    lines.push(format!("     - {volume}"));
                }
            }
        }

        lines.push(String::new());
        lines.push(format!("Total: {} service(s)", services.len()));
        Ok(lines.join("\n"))
    }
}
