// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use rstest::rstest;

use super::*;

#[rstest]
fn test_with_root_layout() {
    let host = HostConfig::with_root("/home/me/.lando");
    assert_eq!(
        host.engine_config_dir,
        PathBuf::from("/home/me/.lando/services/config")
    );
    assert_eq!(host.engine_scripts_dir, PathBuf::from("/home/me/.lando/scripts"));
    assert_eq!(host.sharing, Sharing::Off);
    assert_eq!(host.app_root_bind, "$LANDO_APP_ROOT_BIND");
}

#[rstest]
fn test_parse_full_host_config() {
    let yaml = r#"
engine_config_dir: /srv/lando/config
engine_scripts_dir: /srv/lando/scripts
sharing: ON
platform: linux
app_root_bind: $APP
"#;
    let host = HostConfig::from_yaml(yaml).expect("Should parse host config");
    assert_eq!(host.engine_config_dir, PathBuf::from("/srv/lando/config"));
    assert_eq!(host.sharing, Sharing::On);
    assert_eq!(host.platform, Platform::Linux);
    assert_eq!(host.app_root_bind, "$APP");
}

#[rstest]
fn test_parse_partial_host_config_uses_defaults() {
    let host = HostConfig::from_yaml("platform: darwin\n").unwrap();
    assert_eq!(host.platform, Platform::Darwin);
    assert_eq!(host.sharing, Sharing::Off);
    assert_eq!(host.app_root_bind, DEFAULT_APP_ROOT_BIND);
}

#[rstest]
fn test_parse_invalid_host_config() {
    let result = HostConfig::from_yaml("sharing: [maybe\n");
    assert!(matches!(result, Err(Error::InvalidYaml { .. })));
}

#[rstest]
fn test_load_resolves_relative_dirs() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("host.yaml");
    std::fs::write(
        &path,
        "engine_config_dir: config\nengine_scripts_dir: /abs/scripts\n",
    )
    .unwrap();

    let host = HostConfig::load(&path).unwrap();
    assert_eq!(host.engine_config_dir, tmp.path().join("config"));
    assert_eq!(host.engine_scripts_dir, PathBuf::from("/abs/scripts"));
}

#[rstest]
fn test_load_missing_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let result = HostConfig::load(tmp.path().join("nope.yaml"));
    assert!(matches!(result, Err(Error::ReadFailed { .. })));
}

#[rstest]
#[case("macos", Platform::Darwin)]
#[case("darwin", Platform::Darwin)]
#[case("linux", Platform::Linux)]
#[case("windows", Platform::Windows)]
#[case("freebsd", Platform::Other)]
fn test_platform_from_os(#[case] os: &str, #[case] expected: Platform) {
    assert_eq!(Platform::from_os(os), expected);
}

#[rstest]
#[case("on", Sharing::On)]
#[case("ON", Sharing::On)]
#[case("off", Sharing::Off)]
fn test_parse_sharing(#[case] input: &str, #[case] expected: Sharing) {
    assert_eq!(input.parse::<Sharing>().unwrap(), expected);
}

#[rstest]
fn test_parse_sharing_invalid() {
    assert!("sometimes".parse::<Sharing>().is_err());
}

#[rstest]
fn test_default_dirs_are_absolute() {
    let host = HostConfig::default();
    assert!(host.engine_config_dir.is_absolute());
    assert!(host.engine_scripts_dir.is_absolute());
    assert!(host.engine_config_dir.ends_with(".lando/services/config"));
}

#[rstest]
fn test_from_yaml_defaults_are_absolute() {
    let host = HostConfig::from_yaml("sharing: ON\n").unwrap();
    assert_eq!(host.sharing, Sharing::On);
    assert!(host.engine_config_dir.is_absolute());
    assert!(host.engine_scripts_dir.is_absolute());
}

#[rstest]
#[case("engine_config_dir: config\n")]
#[case("engine_scripts_dir: ./scripts\n")]
fn test_from_yaml_rejects_relative_dirs(#[case] yaml: &str) {
    let result = HostConfig::from_yaml(yaml);
    assert!(matches!(result, Err(Error::ValidationFailed(_))));
}

#[rstest]
fn test_load_relative_path_resolves_absolute() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("host.yaml");
    std::fs::write(&path, "engine_config_dir: config\n").unwrap();

    let host = HostConfig::load(&path).unwrap();
    assert!(host.engine_config_dir.is_absolute());
    assert!(host.engine_scripts_dir.is_absolute());
}

#[rstest]
#[case("darwin", Platform::Darwin)]
#[case("MacOS", Platform::Darwin)]
#[case(" linux ", Platform::Linux)]
#[case("win32", Platform::Windows)]
#[case("other", Platform::Other)]
fn test_parse_platform(#[case] input: &str, #[case] expected: Platform) {
    assert_eq!(input.parse::<Platform>().unwrap(), expected);
}

#[rstest]
#[case("macos-typo")]
#[case("")]
fn test_parse_platform_invalid(#[case] input: &str) {
    let result = input.parse::<Platform>();
    assert!(matches!(result, Err(Error::ValidationFailed(_))));
}
