use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, TAP_FILE, TAPS_DIR, TapConfig};
use crate::ports::TapStore;

/// Filesystem-backed tap store rooted at a working directory.
#[derive(Debug, Clone)]
pub struct FilesystemTapStore {
    root: PathBuf,
}

impl FilesystemTapStore {
    /// Create a tap store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a tap store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn taps_path(&self) -> PathBuf {
        self.root.join(TAPS_DIR)
    }

    fn tap_file(&self, tap_id: &str) -> PathBuf {
        self.taps_path().join(tap_id).join(TAP_FILE)
    }
}

impl TapStore for FilesystemTapStore {
    fn list_taps(&self) -> Result<Vec<String>, AppError> {
        let taps_dir = self.taps_path();
        if !taps_dir.exists() {
            return Ok(Vec::new());
        }

        let mut taps = Vec::new();
        for entry in fs::read_dir(&taps_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if !entry.path().join(TAP_FILE).exists() {
                continue;
            }
            taps.push(entry.file_name().to_string_lossy().to_string());
        }

        taps.sort();
        Ok(taps)
    }

    fn load_tap(&self, tap_id: &str) -> Result<Option<TapConfig>, AppError> {
        let path = self.tap_file(tap_id);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::TapConfigMissing(path.display().to_string())
            } else {
                AppError::from(e)
            }
        })?;

        serde_yaml::from_str(&content).map_err(|e| AppError::ParseError {
            what: path.display().to_string(),
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, FilesystemTapStore) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = FilesystemTapStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    fn write_tap(store: &FilesystemTapStore, tap_id: &str, content: &str) {
        let dir = store.taps_path().join(tap_id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TAP_FILE), content).unwrap();
    }

    #[test]
    fn missing_taps_root_yields_empty_list() {
        let (_dir, store) = test_store();
        assert!(store.list_taps().unwrap().is_empty());
    }

    #[test]
    fn list_taps_is_sorted_and_skips_non_taps() {
        let (_dir, store) = test_store();
        write_tap(&store, "re01", "schedule:\n  frequency: daily\n");
        write_tap(&store, "cl01", "schedule:\n  frequency: hourly\n");

        // A directory without tap.yaml and a stray file are not taps.
        fs::create_dir_all(store.taps_path().join("drafts")).unwrap();
        fs::write(store.taps_path().join("README.md"), "# taps").unwrap();

        assert_eq!(store.list_taps().unwrap(), vec!["cl01", "re01"]);
    }

    #[test]
    fn load_tap_reads_config() {
        let (_dir, store) = test_store();
        write_tap(&store, "re01", "runner:\n  server_type: cpx31\n");

        let config = store.load_tap("re01").unwrap().expect("config should parse");
        assert_eq!(config.runner.server_type, "cpx31");
    }

    #[test]
    fn load_tap_missing_file_is_dedicated_error() {
        let (_dir, store) = test_store();
        let err = store.load_tap("ghost").unwrap_err();
        assert!(matches!(err, AppError::TapConfigMissing(_)));
    }

    #[test]
    fn load_tap_empty_document_is_none() {
        let (_dir, store) = test_store();
        write_tap(&store, "re01", "");
        assert!(store.load_tap("re01").unwrap().is_none());
    }

    #[test]
    fn load_tap_malformed_yaml_is_parse_error() {
        let (_dir, store) = test_store();
        write_tap(&store, "re01", "schedule: [unclosed\n");
        let err = store.load_tap("re01").unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
    }
}
