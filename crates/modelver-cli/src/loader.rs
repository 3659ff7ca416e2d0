//! Loading version maps from disk.

use crate::error::CliError;
use modelver_core::VirtualVersionMap;
use std::path::Path;

/// Read a JSON object of `type -> "M.m.p"` entries.
pub fn load_version_map(path: &Path) -> Result<VirtualVersionMap, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let map: VirtualVersionMap =
        serde_json::from_str(&content).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), types = map.len(), "loaded version map");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_version_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "current.json", r#"{"b": "10.2.0", "a": "8.0.0"}"#);

        let map = load_version_map(&path).unwrap();
        assert_eq!(map.type_names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map.get("b").unwrap().to_string(), "10.2.0");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_version_map(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_invalid_version_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.json", r#"{"a": "10.x.0"}"#);

        let err = load_version_map(&path).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
