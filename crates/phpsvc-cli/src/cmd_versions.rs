// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `phpsvc versions` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

#[cfg(test)]
#[path = "./cmd_versions_test.rs"]
mod cmd_versions_test;

/// List supported php versions
#[derive(Debug, Args)]
pub struct CmdVersions {
    /// Print only the version names, one per line
    #[clap(long)]
    plain: bool,
}

impl CmdVersions {
    pub fn run(&mut self) -> Result<i32> {
        println!("{}", self.render());
        Ok(0)
    }

    fn render(&self) -> String {
        if self.plain {
            return phpsvc::VERSIONS
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\n");
        }

        let mut lines = vec!["Supported php versions:".bold().to_string(), String::new()];

        for version in phpsvc::VERSIONS {
            let default_marker = if version == phpsvc::PhpVersion::DEFAULT {
                " [default]"
            } else {
                ""
            };
            let entrypoint = if version.supports_entrypoint() {
                "entrypoint".green()
            } else {
                "no entrypoint".dimmed()
            };
            lines.push(format!(
                "  {:<8} {}{}",
                version.to_string().cyan(),
                entrypoint,
                default_marker.yellow()
            ));
        }

        lines.push(String::new());
        lines.push(format!("Bundled config: {}", phpsvc::config_dir().display()));
        lines.join("\n")
    }
}
