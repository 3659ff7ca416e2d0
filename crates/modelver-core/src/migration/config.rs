//! Delta calculator configuration.

/// Configuration for [`VersionDeltaCalculator`](super::VersionDeltaCalculator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaConfig {
    /// Whether a target behind the current versions produces a delta.
    /// When false, such a comparison fails with `DowngradeNotAllowed`.
    pub allow_downward: bool,

    /// Types always treated as deleted, on top of the per-call set.
    pub extra_deleted_types: Vec<String>,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            allow_downward: true,
            extra_deleted_types: Vec::new(),
        }
    }
}

impl DeltaConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse downward deltas.
    pub fn without_downward(mut self) -> Self {
        self.allow_downward = false;
        self
    }

    /// Set whether downward deltas are allowed.
    pub fn with_allow_downward(mut self, allow: bool) -> Self {
        self.allow_downward = allow;
        self
    }

    /// Always treat a type as deleted.
    pub fn with_deleted_type(mut self, type_name: impl Into<String>) -> Self {
        self.extra_deleted_types.push(type_name.into());
        self
    }

    /// Merge the configured deleted types with a per-call set, without duplicates.
    pub fn deleted_types(&self, deleted_types: &[String]) -> Vec<String> {
        let mut merged = deleted_types.to_vec();
        for name in &self.extra_deleted_types {
            if !merged.contains(name) {
                merged.push(name.clone());
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeltaConfig::default();
        assert!(config.allow_downward);
        assert!(config.extra_deleted_types.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = DeltaConfig::new()
            .without_downward()
            .with_deleted_type("legacy-url-alias");
        assert!(!config.allow_downward);
        assert_eq!(config.extra_deleted_types, vec!["legacy-url-alias"]);

        assert!(config.with_allow_downward(true).allow_downward);
    }

    #[test]
    fn test_deleted_types_merge() {
        let config = DeltaConfig::new()
            .with_deleted_type("a")
            .with_deleted_type("b");
        let merged = config.deleted_types(&["b".to_string(), "c".to_string()]);
        assert_eq!(merged, vec!["b", "c", "a"]);
    }
}
