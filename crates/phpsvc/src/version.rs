// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Supported php runtime versions and their image capabilities.

use std::fmt;
use std::str::FromStr;

use crate::Error;

#[cfg(test)]
#[path = "./version_test.rs"]
mod version_test;

/// A php runtime version with a published `kalabox/php` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhpVersion {
    V5_3,
    V5_5,
    V5_6,
    V7_0,
    Latest,
    Custom,
}

/// All supported versions, oldest first.
pub const VERSIONS: [PhpVersion; 6] = [
    PhpVersion::V5_3,
    PhpVersion::V5_5,
    PhpVersion::V5_6,
    PhpVersion::V7_0,
    PhpVersion::Latest,
    PhpVersion::Custom,
];

impl PhpVersion {
    /// The version used when a request does not name one.
    pub const DEFAULT: Self = Self::V7_0;

    /// The tag fragment used in image names, e.g. `7.0` in `7.0-fpm`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V5_3 => "5.3",
            Self::V5_5 => "5.5",
            Self::V5_6 => "5.6",
            Self::V7_0 => "7.0",
            Self::Latest => "latest",
            Self::Custom => "custom",
        }
    }

    /// Whether the image ships `docker-php-entrypoint`.
    ///
    /// Upstream images gained the entrypoint with 5.6. `latest` tracks the
    /// newest upstream image and gets the entrypoint too, unlike the old
    /// numeric `> 55` check which never matched it. A `custom` image is
    /// built by the user, so nothing can be assumed about it.
    pub fn supports_entrypoint(&self) -> bool {
        match self {
            Self::V5_3 | Self::V5_5 | Self::Custom => false,
            Self::V5_6 | Self::V7_0 | Self::Latest => true,
        }
    }

    /// The supported versions as strings, in declaration order.
    pub fn supported() -> Vec<String> {
        VERSIONS.iter().map(|v| v.to_string()).collect()
    }
}

impl Default for PhpVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VERSIONS
            .iter()
            .find(|v| v.as_str() == trimmed)
            .copied()
            .ok_or_else(|| Error::UnsupportedVersion {
                version: s.to_string(),
                supported: Self::supported(),
            })
    }
}
