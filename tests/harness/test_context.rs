//! Shared testing harness for `tapctl` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated taps tree for CLI exercises.
#[allow(dead_code)]
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `tapctl` binary within the
    /// default workspace.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tapctl").expect("Failed to locate tapctl binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the `taps/` directory in the work directory.
    pub(crate) fn taps_path(&self) -> PathBuf {
        self.work_dir.join("taps")
    }

    /// Write `taps/<tap_id>/tap.yaml` with the given content.
    pub(crate) fn write_tap(&self, tap_id: &str, content: &str) {
        let dir = self.taps_path().join(tap_id);
        fs::create_dir_all(&dir).expect("Failed to create tap directory");
        fs::write(dir.join("tap.yaml"), content).expect("Failed to write tap.yaml");
    }

    /// Create `taps/<tap_id>/` without a `tap.yaml`.
    pub(crate) fn write_bare_tap_dir(&self, tap_id: &str) {
        fs::create_dir_all(self.taps_path().join(tap_id)).expect("Failed to create tap directory");
    }
}
