//! Core error types.

use thiserror::Error;

/// Errors raised while parsing or interpreting versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string is not a valid `major.minor.patch` version.
    #[error("invalid virtual version '{version}': {reason}")]
    InvalidVersion {
        /// The rejected input.
        version: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The version does not encode a model version.
    #[error("virtual version {version} is not a model version")]
    NotAModelVersion {
        /// The offending version, in display form.
        version: String,
    },
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidVersion {
            version: "1.x.0".to_string(),
            reason: "component 'x' is not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid virtual version '1.x.0': component 'x' is not a number"
        );

        let err = Error::NotAModelVersion {
            version: "8.9.0".to_string(),
        };
        assert!(err.to_string().contains("8.9.0"));
    }
}
