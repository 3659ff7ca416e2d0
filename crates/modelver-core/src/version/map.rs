//! Version maps: type name to virtual version snapshots.

use super::virtual_version::VirtualVersion;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Snapshot of the virtual version of every known type.
///
/// Iteration follows insertion order. Re-inserting an existing type updates
/// its version without moving it. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualVersionMap {
    entries: IndexMap<String, VirtualVersion>,
}

impl VirtualVersionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map an application targets from its registered types.
    pub fn from_types<'a, I>(types: I) -> Self
    where
        I: IntoIterator<Item = &'a TypeVersionSource>,
    {
        types
            .into_iter()
            .map(|source| (source.name.clone(), source.current_version()))
            .collect()
    }

    /// Set the version of a type, returning the previous one if any.
    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        version: VirtualVersion,
    ) -> Option<VirtualVersion> {
        self.entries.insert(type_name.into(), version)
    }

    /// Builder-style insert.
    pub fn with(mut self, type_name: impl Into<String>, version: VirtualVersion) -> Self {
        self.insert(type_name, version);
        self
    }

    /// Get the version recorded for a type.
    pub fn get(&self, type_name: &str) -> Option<&VirtualVersion> {
        self.entries.get(type_name)
    }

    /// Check if a type is present.
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Number of types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type names in insertion order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VirtualVersion)> {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version))
    }
}

impl<S: Into<String>> FromIterator<(S, VirtualVersion)> for VirtualVersionMap {
    fn from_iter<T: IntoIterator<Item = (S, VirtualVersion)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, version)| (name.into(), version))
                .collect(),
        }
    }
}

/// Version-relevant description of a registered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeVersionSource {
    /// Type name.
    pub name: String,
    /// Number of declared model versions. The latest model version equals this count.
    #[serde(default)]
    pub model_versions: u64,
    /// Versions keyed by legacy migration functions.
    #[serde(default)]
    pub legacy_migrations: Vec<VirtualVersion>,
}

impl TypeVersionSource {
    /// Create a source with no migrations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_versions: 0,
            legacy_migrations: Vec::new(),
        }
    }

    /// Set the number of model versions.
    pub fn with_model_versions(mut self, count: u64) -> Self {
        self.model_versions = count;
        self
    }

    /// Add a legacy migration version.
    pub fn with_legacy_migration(mut self, version: VirtualVersion) -> Self {
        self.legacy_migrations.push(version);
        self
    }

    /// The virtual version the type is at once all its migrations have run.
    ///
    /// Model versions win over legacy migrations; a type with neither is at `0.0.0`.
    pub fn current_version(&self) -> VirtualVersion {
        if self.model_versions > 0 {
            return VirtualVersion::from_model_version(self.model_versions);
        }
        self.legacy_migrations
            .iter()
            .copied()
            .max()
            .unwrap_or(VirtualVersion::ZERO)
    }
}
