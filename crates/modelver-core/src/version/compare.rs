//! Comparison of two version maps.
//!
//! The comparator decides, type by type, whether the target map is ahead
//! of, behind, or level with the current map, then folds that into an
//! overall classification.

use super::map::VirtualVersionMap;
use super::virtual_version::VirtualVersion;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Overall relationship of the target map to the current map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareStatus {
    /// Some types are ahead in the target and none are behind.
    Greater,
    /// Some types are behind in the target and none are ahead.
    Lesser,
    /// Every type is at the same version.
    Equal,
    /// Some types are ahead and others are behind.
    Conflict,
}

impl fmt::Display for CompareStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareStatus::Greater => write!(f, "greater"),
            CompareStatus::Lesser => write!(f, "lesser"),
            CompareStatus::Equal => write!(f, "equal"),
            CompareStatus::Conflict => write!(f, "conflict"),
        }
    }
}

/// Per-type breakdown of a comparison, in comparator iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareDetails {
    /// Types whose target version is ahead of the current one.
    pub greater: Vec<String>,
    /// Types whose target version is behind the current one.
    pub lesser: Vec<String>,
    /// Types at the same version on both sides.
    pub equal: Vec<String>,
}

/// Result of comparing two version maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionComparison {
    /// Overall classification.
    pub status: CompareStatus,
    /// Types responsible for the classification.
    pub details: CompareDetails,
}

impl VersionComparison {
    /// Derive the overall status from a per-type breakdown.
    pub fn from_details(details: CompareDetails) -> Self {
        let status = match (details.greater.is_empty(), details.lesser.is_empty()) {
            (false, false) => CompareStatus::Conflict,
            (false, true) => CompareStatus::Greater,
            (true, false) => CompareStatus::Lesser,
            (true, true) => CompareStatus::Equal,
        };
        Self { status, details }
    }
}

/// Classifies the relationship between a current and a target version map.
pub trait VersionComparator: Send + Sync {
    /// Compare `target` against `current`, ignoring `deleted_types`.
    fn compare(
        &self,
        current: &VirtualVersionMap,
        target: &VirtualVersionMap,
        deleted_types: &[String],
    ) -> VersionComparison;
}

impl<C: VersionComparator + ?Sized> VersionComparator for &C {
    fn compare(
        &self,
        current: &VirtualVersionMap,
        target: &VirtualVersionMap,
        deleted_types: &[String],
    ) -> VersionComparison {
        (**self).compare(current, target, deleted_types)
    }
}

impl<C: VersionComparator + ?Sized> VersionComparator for Box<C> {
    fn compare(
        &self,
        current: &VirtualVersionMap,
        target: &VirtualVersionMap,
        deleted_types: &[String],
    ) -> VersionComparison {
        (**self).compare(current, target, deleted_types)
    }
}

/// Default comparator using numeric version ordering.
///
/// Types are visited in target-map order, then current-only types in
/// current-map order. A type missing on one side is treated as `0.0.0`
/// there.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverComparator;

impl VersionComparator for SemverComparator {
    fn compare(
        &self,
        current: &VirtualVersionMap,
        target: &VirtualVersionMap,
        deleted_types: &[String],
    ) -> VersionComparison {
        let deleted: HashSet<&str> = deleted_types.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        let mut details = CompareDetails::default();

        let candidates = target
            .type_names()
            .chain(current.type_names())
            .filter(|name| !deleted.contains(name));

        for name in candidates {
            if !seen.insert(name) {
                continue;
            }

            let target_version = target.get(name).copied().unwrap_or(VirtualVersion::ZERO);
            let current_version = current.get(name).copied().unwrap_or(VirtualVersion::ZERO);

            let bucket = match target_version.cmp(&current_version) {
                std::cmp::Ordering::Greater => &mut details.greater,
                std::cmp::Ordering::Less => &mut details.lesser,
                std::cmp::Ordering::Equal => &mut details.equal,
            };
            bucket.push(name.to_string());
        }

        VersionComparison::from_details(details)
    }
}
