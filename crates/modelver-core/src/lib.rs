//! modelver core - virtual version maps and model version deltas.
//!
//! This crate compares the virtual versions recorded for persisted object
//! types against the versions an application targets, and derives the
//! migration direction plus the per-type changes.

pub mod error;
pub mod migration;
pub mod version;

pub use error::{Error, Result};
pub use migration::{
    get_model_version_delta, DeltaConfig, DeltaStatus, MigrationError, ModelVersionDelta,
    TypeDelta, VersionDeltaCalculator,
};
pub use version::{
    CompareDetails, CompareStatus, SemverComparator, TypeVersionSource, VersionComparator,
    VersionComparison, VirtualVersion, VirtualVersionMap, MODEL_VERSION_VIRTUAL_MAJOR,
};
