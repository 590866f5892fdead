// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Helpers for building `local:remote` volume specs.

use std::path::Path;

#[cfg(test)]
#[path = "./volume_test.rs"]
mod volume_test;

/// Where helper scripts are mounted inside containers.
pub const SCRIPTS_MOUNT_DIR: &str = "/scripts";

/// Build a bind mount spec from a local path and a container path.
///
/// Absolute local paths are used as-is, anything else is joined under `base`.
pub fn build_volume<L, B>(local: L, remote: &str, base: B) -> String
where
    L: AsRef<Path>,
    B: AsRef<Path>,
{
    let local = local.as_ref();
    let local = if local.is_absolute() {
        local.to_path_buf()
    } else {
        base.as_ref().join(local)
    };
    format!("{}:{}", local.display(), remote)
}

/// The container side of a volume spec.
pub fn mount_target(mount: &str) -> &str {
    mount.rsplit_once(':').map_or(mount, |(_, remote)| remote)
}

/// The host side of a volume spec (a path or a named volume).
pub fn mount_source(mount: &str) -> &str {
    mount.rsplit_once(':').map_or(mount, |(local, _)| local)
}

/// Add a config mount, replacing any existing mount of the same container path.
pub fn add_config(mount: String, volumes: Vec<String>) -> Vec<String> {
    let target = mount_target(&mount).to_string();
    let mut volumes: Vec<String> = volumes
        .into_iter()
        .filter(|v| mount_target(v) != target)
        .collect();
    volumes.push(mount);
    volumes
}

/// Add a helper script from `scripts_dir`, mounted under [`SCRIPTS_MOUNT_DIR`].
pub fn add_script<P: AsRef<Path>>(script: &str, scripts_dir: P, volumes: Vec<String>) -> Vec<String> {
    let remote = format!("{SCRIPTS_MOUNT_DIR}/{script}");
    let mount = build_volume(script, &remote, scripts_dir);
    add_config(mount, volumes)
}
