// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
#[case("5.3", PhpVersion::V5_3)]
#[case("5.5", PhpVersion::V5_5)]
#[case("5.6", PhpVersion::V5_6)]
#[case("7.0", PhpVersion::V7_0)]
#[case("latest", PhpVersion::Latest)]
#[case("custom", PhpVersion::Custom)]
fn test_parse_supported(#[case] input: &str, #[case] expected: PhpVersion) {
    let version: PhpVersion = input.parse().expect("version should parse");
    assert_eq!(version, expected);
    assert_eq!(version.to_string(), input);
}

#[rstest]
#[case("5.5", false)]
#[case("5.6", true)]
#[case("7.0", true)]
#[case("custom", false)]
fn test_entrypoint_capability(#[case] input: &str, #[case] expected: bool) {
    let version: PhpVersion = input.parse().unwrap();
    assert_eq!(version.supports_entrypoint(), expected);
}

#[rstest]
#[case("7")]
#[case("7.0.1")]
#[case("")]
#[case("php7")]
fn test_parse_unsupported(#[case] input: &str) {
    let err = input.parse::<PhpVersion>().unwrap_err();
    match err {
        Error::UnsupportedVersion { version, supported } => {
            assert_eq!(version, input);
            assert_eq!(supported.len(), VERSIONS.len());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn test_default_version() {
    assert_eq!(PhpVersion::default(), PhpVersion::V7_0);
    assert_eq!(
        PhpVersion::supported(),
        vec!["5.3", "5.5", "5.6", "7.0", "latest", "custom"]
    );
}
