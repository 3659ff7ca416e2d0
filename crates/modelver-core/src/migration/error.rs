//! Migration-specific error types.

use thiserror::Error;

/// Errors raised while computing a model version delta.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrationError {
    /// The two version maps cannot be ordered.
    #[error(
        "cannot generate model version difference: conflict between versions \
         (ahead: {greater:?}, behind: {lesser:?})"
    )]
    Conflict {
        /// Types ahead in the target map.
        greater: Vec<String>,
        /// Types behind in the target map.
        lesser: Vec<String>,
    },

    /// A type reported as differing is missing from one of the maps.
    #[error("consistency error: trying to generate delta with missing entry for type {type_name}")]
    Consistency {
        /// The type with the missing entry.
        type_name: String,
    },

    /// The delta goes downward and the calculator is configured to refuse that.
    #[error("downward migration not allowed for types {types:?}")]
    DowngradeNotAllowed {
        /// Types that would move to a lower version.
        types: Vec<String>,
    },
}

impl MigrationError {
    /// Check if the error reflects a bug rather than a planning outcome.
    pub fn is_internal(&self) -> bool {
        matches!(self, MigrationError::Consistency { .. })
    }
}
