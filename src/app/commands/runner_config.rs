//! Runner config loader: project one tap's runner requirements.

use crate::domain::{AppError, RunnerSpec};
use crate::ports::TapStore;

/// Load `taps/<tap_id>/tap.yaml` and project its runner spec.
///
/// Missing configuration is fatal here, unlike the batch scan: the caller
/// has already committed to running this tap and cannot provision compute
/// without its runner shape.
pub fn execute(store: &impl TapStore, tap_id: &str) -> Result<RunnerSpec, AppError> {
    let config = store.load_tap(tap_id)?.unwrap_or_default();
    Ok(RunnerSpec::from_config(&config))
}
