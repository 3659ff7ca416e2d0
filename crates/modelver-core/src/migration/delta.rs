//! Model version delta computation.
//!
//! Given the versions currently recorded for each type and the versions the
//! application targets, works out which way the migration goes and which
//! types change along the way.

use super::config::DeltaConfig;
use super::error::MigrationError;
use crate::version::{
    CompareStatus, SemverComparator, VersionComparator, VirtualVersion, VirtualVersionMap,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Direction of a model version delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaStatus {
    /// Target versions are ahead; migrate forward.
    Upward,
    /// Target versions are behind; roll back.
    Downward,
    /// Nothing to do.
    Noop,
}

impl fmt::Display for DeltaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaStatus::Upward => write!(f, "upward"),
            DeltaStatus::Downward => write!(f, "downward"),
            DeltaStatus::Noop => write!(f, "noop"),
        }
    }
}

/// Version change of a single type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDelta {
    /// The name of the type.
    pub name: String,
    /// The version the type is at.
    pub current: VirtualVersion,
    /// The version the type should go to.
    pub target: VirtualVersion,
}

/// Difference between two version maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelVersionDelta {
    /// Direction of travel.
    pub status: DeltaStatus,
    /// Changed types, in comparator order.
    pub diff: Vec<TypeDelta>,
}

impl ModelVersionDelta {
    /// A delta with nothing to do.
    pub fn noop() -> Self {
        Self {
            status: DeltaStatus::Noop,
            diff: Vec::new(),
        }
    }

    /// Check if the delta requires no migration.
    pub fn is_noop(&self) -> bool {
        self.status == DeltaStatus::Noop
    }

    /// Number of changed types.
    pub fn len(&self) -> usize {
        self.diff.len()
    }

    /// Check if no type changes.
    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    /// Names of the changed types, in order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.diff.iter().map(|delta| delta.name.as_str())
    }

    /// Look up the change for a type.
    pub fn get(&self, type_name: &str) -> Option<&TypeDelta> {
        self.diff.iter().find(|delta| delta.name == type_name)
    }
}

/// Computes model version deltas using an injected comparator.
#[derive(Debug, Clone)]
pub struct VersionDeltaCalculator<C = SemverComparator> {
    comparator: C,
    config: DeltaConfig,
}

impl<C: VersionComparator> VersionDeltaCalculator<C> {
    /// Create a calculator with the default configuration.
    pub fn new(comparator: C) -> Self {
        Self::with_config(comparator, DeltaConfig::default())
    }

    /// Create a calculator with an explicit configuration.
    pub fn with_config(comparator: C, config: DeltaConfig) -> Self {
        Self { comparator, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DeltaConfig {
        &self.config
    }

    /// Compute the difference to go from `current` to `target`.
    ///
    /// Fails with [`MigrationError::Conflict`] if the maps cannot be ordered,
    /// and with [`MigrationError::Consistency`] if a type the comparator
    /// reports as changed is absent from either map.
    pub fn compute_delta(
        &self,
        current: &VirtualVersionMap,
        target: &VirtualVersionMap,
        deleted_types: &[String],
    ) -> Result<ModelVersionDelta, MigrationError> {
        let deleted_types = self.config.deleted_types(deleted_types);
        let compared = self.comparator.compare(current, target, &deleted_types);

        let (status, changed) = match compared.status {
            CompareStatus::Conflict => {
                warn!(
                    greater = ?compared.details.greater,
                    lesser = ?compared.details.lesser,
                    "version maps are in conflict"
                );
                return Err(MigrationError::Conflict {
                    greater: compared.details.greater,
                    lesser: compared.details.lesser,
                });
            }
            CompareStatus::Greater => (DeltaStatus::Upward, compared.details.greater),
            CompareStatus::Lesser => (DeltaStatus::Downward, compared.details.lesser),
            CompareStatus::Equal => (DeltaStatus::Noop, Vec::new()),
        };

        if status == DeltaStatus::Downward && !self.config.allow_downward {
            warn!(types = ?changed, "refusing downward model version delta");
            return Err(MigrationError::DowngradeNotAllowed { types: changed });
        }

        let diff = changed
            .into_iter()
            .map(|name| type_delta(name, current, target))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(status = %status, types = diff.len(), "computed model version delta");

        Ok(ModelVersionDelta { status, diff })
    }
}

impl Default for VersionDeltaCalculator<SemverComparator> {
    fn default() -> Self {
        Self::new(SemverComparator)
    }
}

/// Compute the delta between two version maps with the default comparator.
pub fn get_model_version_delta(
    current: &VirtualVersionMap,
    target: &VirtualVersionMap,
    deleted_types: &[String],
) -> Result<ModelVersionDelta, MigrationError> {
    VersionDeltaCalculator::default().compute_delta(current, target, deleted_types)
}

fn type_delta(
    name: String,
    current: &VirtualVersionMap,
    target: &VirtualVersionMap,
) -> Result<TypeDelta, MigrationError> {
    match (current.get(&name), target.get(&name)) {
        (Some(&current), Some(&target)) => Ok(TypeDelta {
            name,
            current,
            target,
        }),
        _ => {
            warn!(type_name = %name, "changed type missing from a version map");
            Err(MigrationError::Consistency { type_name: name })
        }
    }
}
