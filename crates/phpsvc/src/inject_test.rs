// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use rstest::rstest;

use super::*;
use crate::service::ServiceDefinition;

fn services(names: &[&str]) -> ServiceMapping {
    names
        .iter()
        .map(|n| (n.to_string(), ServiceDefinition::default()))
        .collect()
}

fn custom(server: Option<&str>, conf: Option<&str>) -> CustomConfig {
    CustomConfig {
        server: server.map(PathBuf::from),
        conf: conf.map(PathBuf::from),
    }
}

#[rstest]
fn test_nothing_to_inject() {
    let mut mapping = services(&["appserver", "nginx"]);
    inject_custom_config(
        &mut mapping,
        "appserver",
        Mechanism::Nginx,
        "/etc/nginx/conf.d/default.conf",
        &CustomConfig::default(),
        &HostConfig::default(),
    );
    assert!(mapping.values().all(|s| s.volumes.is_empty()));
}

#[rstest]
fn test_inject_nginx_targets() {
    let mut mapping = services(&["appserver", "nginx"]);
    inject_custom_config(
        &mut mapping,
        "appserver",
        Mechanism::Nginx,
        "/etc/nginx/conf.d/default.conf",
        &custom(Some("config/site.conf"), Some("config/php.ini")),
        &HostConfig::default(),
    );

    assert_eq!(
        mapping["nginx"].volumes,
        vec!["$LANDO_APP_ROOT_BIND/config/site.conf:/etc/nginx/conf.d/default.conf"]
    );
    assert_eq!(
        mapping["appserver"].volumes,
        vec!["$LANDO_APP_ROOT_BIND/config/php.ini:/usr/local/etc/php/php.ini"]
    );
}

#[rstest]
fn test_inject_apache_targets_same_service() {
    let mut mapping = services(&["web"]);
    inject_custom_config(
        &mut mapping,
        "web",
        Mechanism::Apache,
        "/etc/apache2/sites-available/000-default.conf",
        &custom(Some("/opt/site.conf"), Some("php.ini")),
        &HostConfig::default(),
    );

    assert_eq!(
        mapping["web"].volumes,
        vec![
            "/opt/site.conf:/etc/apache2/sites-available/000-default.conf",
            "$LANDO_APP_ROOT_BIND/php.ini:/usr/local/etc/php/php.ini",
        ]
    );
}

#[rstest]
fn test_inject_replaces_default_mount() {
    let mut mapping = services(&["web"]);
    mapping["web"].volumes = vec![
        "/lando/php/httpd-ssl.conf:/etc/apache2/sites-available/000-default.conf".to_string(),
        "/lando/scripts/add-cert.sh:/scripts/add-cert.sh".to_string(),
    ];
    inject_custom_config(
        &mut mapping,
        "web",
        Mechanism::Apache,
        "/etc/apache2/sites-available/000-default.conf",
        &custom(Some("site.conf"), None),
        &HostConfig::default(),
    );

    assert_eq!(
        mapping["web"].volumes,
        vec![
            "/lando/scripts/add-cert.sh:/scripts/add-cert.sh",
            "$LANDO_APP_ROOT_BIND/site.conf:/etc/apache2/sites-available/000-default.conf",
        ]
    );
}

#[rstest]
fn test_inject_missing_owner_is_skipped() {
    let mut mapping = services(&["appserver"]);
    inject_custom_config(
        &mut mapping,
        "appserver",
        Mechanism::Nginx,
        "/etc/nginx/conf.d/default.conf",
        &custom(Some("site.conf"), None),
        &HostConfig::default(),
    );
    assert_eq!(mapping.len(), 1);
    assert!(mapping["appserver"].volumes.is_empty());
}

#[rstest]
fn test_target_keys() {
    let keys: Vec<_> = ConfigTarget::ALL.iter().map(|t| t.key()).collect();
    assert_eq!(keys, vec!["server", "conf"]);
}
