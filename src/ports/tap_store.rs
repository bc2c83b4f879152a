//! Port for reading tap definitions.

use crate::domain::{AppError, TapConfig};

/// Read-only access to the tap definition tree.
pub trait TapStore {
    /// Ids of all taps, sorted lexicographically.
    ///
    /// A tap is a subdirectory of the taps root containing a `tap.yaml`;
    /// anything else is ignored. A missing taps root yields an empty list.
    fn list_taps(&self) -> Result<Vec<String>, AppError>;

    /// Load and parse one tap's `tap.yaml`.
    ///
    /// Returns `Ok(None)` when the document is empty (YAML null). A missing
    /// file is `AppError::TapConfigMissing`; malformed YAML is a parse error.
    fn load_tap(&self, tap_id: &str) -> Result<Option<TapConfig>, AppError>;
}
