// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Delivery mechanisms: how the php container is served to the outside.

use std::fmt;
use std::str::FromStr;

use crate::Error;

#[cfg(test)]
#[path = "./via_test.rs"]
mod via_test;

/// The web server that fronts php.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mechanism {
    /// A separate nginx container proxying to php-fpm.
    Nginx,
    /// Apache with mod_php inside the php container itself.
    Apache,
}

impl Mechanism {
    /// Used when a request omits `via` entirely.
    pub const DEFAULT: Self = Self::Nginx;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nginx => "nginx",
            Self::Apache => "apache",
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `via` value: `mechanism[:variant]`.
///
/// At most one `:` is allowed, so the variant is always a single image tag.
///
/// The variant is opaque here; for nginx it selects the proxy image
/// version (`nginx:1.10`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Via {
    pub mechanism: Mechanism,
    pub variant: Option<String>,
}

impl Via {
    pub fn new(mechanism: Mechanism) -> Self {
        Self {
            mechanism,
            variant: None,
        }
    }

    /// Parse an optional `via` string, falling back to the default mechanism
    /// only when the value is absent.
    pub fn from_optional(via: Option<&str>) -> crate::Result<Self> {
        match via {
            Some(s) => s.parse(),
            None => Ok(Self::new(Mechanism::DEFAULT)),
        }
    }

    /// The service type handed to the proxy builder, e.g. `nginx:1.10`.
    pub fn proxy_type(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => write!(f, "{}:{}", self.mechanism, variant),
            None => write!(f, "{}", self.mechanism),
        }
    }
}

impl FromStr for Via {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, variant) = match s.trim().split_once(':') {
            Some((head, rest)) => (head, Some(rest.trim())),
            None => (s.trim(), None),
        };

        if variant.is_some_and(|v| v.contains(':')) {
            return Err(Error::UnsupportedVia(s.to_string()));
        }

        let mechanism = match head.trim() {
            "nginx" => Mechanism::Nginx,
            "apache" => Mechanism::Apache,
            _ => return Err(Error::UnsupportedVia(s.to_string())),
        };

        Ok(Self {
            mechanism,
            variant: variant.filter(|v| !v.is_empty()).map(String::from),
        })
    }
}
