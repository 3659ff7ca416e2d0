//! Virtual version markers.
//!
//! A virtual version is a `major.minor.patch` triple attached to a persisted
//! object type. Types that moved to model versions use a reserved major
//! (`10`), with the model version carried in the minor component.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Major component reserved for versions derived from model versions.
pub const MODEL_VERSION_VIRTUAL_MAJOR: u64 = 10;

/// A totally-ordered version marker for a persisted object type.
///
/// Ordering compares `major`, then `minor`, then `patch` numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VirtualVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl VirtualVersion {
    /// The version assumed for a type with no recorded version.
    pub const ZERO: VirtualVersion = VirtualVersion::new(0, 0, 0);

    /// Create a version from its components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Encode a model version as a virtual version (`10.N.0`).
    pub const fn from_model_version(model_version: u64) -> Self {
        Self::new(MODEL_VERSION_VIRTUAL_MAJOR, model_version, 0)
    }

    /// Major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Check if this version encodes a model version.
    pub fn is_model_version(&self) -> bool {
        self.major == MODEL_VERSION_VIRTUAL_MAJOR
    }

    /// Decode the model version carried by this version.
    pub fn to_model_version(&self) -> Result<u64> {
        if self.is_model_version() {
            Ok(self.minor)
        } else {
            Err(Error::NotAModelVersion {
                version: self.to_string(),
            })
        }
    }
}

impl Default for VirtualVersion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for VirtualVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VirtualVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidVersion {
            version: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(invalid("empty version".to_string()));
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid(format!(
                "expected 3 components, found {}",
                parts.len()
            )));
        }

        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(format!("component '{}' is not a number", part)));
            }
            *slot = part
                .parse()
                .map_err(|_| invalid(format!("component '{}' is out of range", part)))?;
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }
}

impl TryFrom<String> for VirtualVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VirtualVersion> for String {
    fn from(version: VirtualVersion) -> Self {
        version.to_string()
    }
}
