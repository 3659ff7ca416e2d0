//! CLI error types.

use modelver_core::MigrationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command-line client.
#[derive(Debug, Error)]
pub enum CliError {
    /// A version map file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A version map file is not a valid JSON version map.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Delta computation failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),
}

impl CliError {
    /// Process exit code for this error. Internal invariant violations
    /// exit with 2 so scripts can tell them apart from planning failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Migration(e) if e.is_internal() => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let internal = CliError::Migration(MigrationError::Consistency {
            type_name: "dashboard".to_string(),
        });
        assert_eq!(internal.exit_code(), 2);

        let conflict = CliError::Migration(MigrationError::Conflict {
            greater: vec!["a".to_string()],
            lesser: vec!["b".to_string()],
        });
        assert_eq!(conflict.exit_code(), 1);

        let io = CliError::Io {
            path: PathBuf::from("current.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(io.exit_code(), 1);
    }
}
