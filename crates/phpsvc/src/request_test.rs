// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use rstest::rstest;

use super::*;

#[rstest]
fn test_parse_minimal_request() {
    let request = ServiceRequest::from_yaml("ssl: false\n").expect("Should parse request");
    assert!(request.version.is_none());
    assert!(request.via.is_none());
    assert!(!request.ssl);
    assert_eq!(request.config, CustomConfig::default());
    assert!(request.sharing.is_empty());
}

#[rstest]
fn test_parse_full_request() {
    let yaml = r#"
version: "5.6"
via: nginx:1.10
ssl: true
config:
  server: config/nginx.conf
  conf: config/php.ini
sharing:
  appserver:
    remote: /var/www/html
"#;
    let request = ServiceRequest::from_yaml(yaml).expect("Should parse request");
    assert_eq!(request.version.as_deref(), Some("5.6"));
    assert_eq!(request.via.as_deref(), Some("nginx:1.10"));
    assert!(request.ssl);
    assert_eq!(request.config.server, Some(PathBuf::from("config/nginx.conf")));
    assert_eq!(request.config.conf, Some(PathBuf::from("config/php.ini")));
    assert_eq!(request.sharing["appserver"].len(), 1);
}

#[rstest]
#[case("version: 7.0\n", "7.0")]
#[case("version: 5.3\n", "5.3")]
#[case("version: latest\n", "latest")]
#[case("version: 7\n", "7")]
fn test_parse_unquoted_version(#[case] yaml: &str, #[case] expected: &str) {
    let request = ServiceRequest::from_yaml(yaml).unwrap();
    assert_eq!(request.version.as_deref(), Some(expected));
}

#[rstest]
fn test_parse_invalid_version_type() {
    let result = ServiceRequest::from_yaml("version: [7, 0]\n");
    assert!(matches!(result, Err(Error::InvalidYaml { .. })));
}

#[rstest]
fn test_load_request_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("appserver.yaml");
    std::fs::write(&path, "via: apache\nssl: true\n").unwrap();

    let request = ServiceRequest::load(&path).unwrap();
    assert_eq!(request.via.as_deref(), Some("apache"));
    assert!(request.ssl);
}

#[rstest]
fn test_load_missing_request_file() {
    let result = ServiceRequest::load("/definitely/not/here.yaml");
    assert!(matches!(result, Err(Error::ReadFailed { .. })));
}
