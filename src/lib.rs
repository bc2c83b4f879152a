//! tapctl: workflow primitives for scheduled tap execution.
//!
//! Two stateless operations back a GitHub Actions pipeline: finding the taps
//! whose schedules are due at a given instant, and projecting a single tap's
//! runner provisioning requirements. Both are pure reads of the `taps/`
//! directory tree.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use chrono::{DateTime, Utc};

use app::commands::{due, runner_config};
use services::FilesystemTapStore;

pub use app::commands::due::{DueReport, TapEvaluation};
pub use domain::{AppError, Frequency, RunnerSpec, Schedule};

/// Evaluate every tap under `taps/` in the current directory against `now`.
///
/// Taps whose configuration fails to load are recorded as skipped in the
/// report; a single bad document never aborts the scan.
pub fn find_due_taps(now: DateTime<Utc>) -> Result<DueReport, AppError> {
    let store = FilesystemTapStore::current()?;
    due::execute(&store, now)
}

/// Load the runner provisioning spec for a single tap.
///
/// Unlike the batch scan, a missing `tap.yaml` is an error here: the caller
/// has already committed to running this tap.
pub fn runner_config(tap_id: &str) -> Result<RunnerSpec, AppError> {
    let store = FilesystemTapStore::current()?;
    runner_config::execute(&store, tap_id)
}
