// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque identifiers for server-side entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Names a vendor, bookmark relation, user, or any other remote entity.
///
/// Serialized untagged, so it round-trips as either `42` or `"42"`. The two
/// forms are distinct references: the server decides which one it issues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceRef {
    Int(i64),
    Str(String),
}

impl ResourceRef {
    /// Parses user input: all-digit input becomes [`ResourceRef::Int`],
    /// anything else non-empty becomes [`ResourceRef::Str`].
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Returns the integer form, if this reference is numeric.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ResourceRef::Int(n) => Some(*n),
            ResourceRef::Str(_) => None,
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRef::Int(n) => write!(f, "{}", n),
            ResourceRef::Str(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for ResourceRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidRef(s.to_string()));
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Ok(ResourceRef::Int(n)),
            Err(_) => Ok(ResourceRef::Str(trimmed.to_string())),
        }
    }
}

impl From<i64> for ResourceRef {
    fn from(n: i64) -> Self {
        ResourceRef::Int(n)
    }
}

impl From<&str> for ResourceRef {
    fn from(s: &str) -> Self {
        ResourceRef::Str(s.to_string())
    }
}

impl From<String> for ResourceRef {
    fn from(s: String) -> Self {
        ResourceRef::Str(s)
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
