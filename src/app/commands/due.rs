//! Due-tap finder: evaluate every tap's schedule against a single instant.

use chrono::{DateTime, Utc};

use crate::domain::{AppError, Schedule};
use crate::ports::TapStore;

/// Outcome of evaluating one tap during a scan.
#[derive(Debug, Clone)]
pub enum TapEvaluation {
    /// Schedule loaded and evaluated.
    Evaluated { tap_id: String, schedule: Schedule, due: bool },
    /// Configuration failed to load or parse; the scan continued without it.
    Skipped { tap_id: String, reason: String },
}

/// Result of a full scan of the taps directory.
#[derive(Debug, Clone)]
pub struct DueReport {
    /// The instant the schedules were evaluated against.
    pub now: DateTime<Utc>,
    /// Per-tap outcomes in scan (lexicographic) order.
    pub evaluations: Vec<TapEvaluation>,
}

impl DueReport {
    /// Ids of due taps, in scan order.
    pub fn due_ids(&self) -> Vec<String> {
        self.evaluations
            .iter()
            .filter_map(|eval| match eval {
                TapEvaluation::Evaluated { tap_id, due: true, .. } => Some(tap_id.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Scan the taps directory and evaluate each schedule at `now`.
///
/// A tap that fails to load is recorded as skipped; the scan never aborts on
/// a single bad document.
pub fn execute(store: &impl TapStore, now: DateTime<Utc>) -> Result<DueReport, AppError> {
    let mut evaluations = Vec::new();

    for tap_id in store.list_taps()? {
        match evaluate_tap(store, &tap_id, now) {
            Ok(Some(eval)) => evaluations.push(eval),
            // Empty document: nothing to evaluate.
            Ok(None) => {}
            Err(err) => {
                evaluations.push(TapEvaluation::Skipped { tap_id, reason: err.to_string() });
            }
        }
    }

    Ok(DueReport { now, evaluations })
}

fn evaluate_tap(
    store: &impl TapStore,
    tap_id: &str,
    now: DateTime<Utc>,
) -> Result<Option<TapEvaluation>, AppError> {
    let Some(config) = store.load_tap(tap_id)? else {
        return Ok(None);
    };

    let schedule = Schedule::from_section(&config.schedule)?;
    let due = schedule.is_due(now);
    Ok(Some(TapEvaluation::Evaluated { tap_id: tap_id.to_string(), schedule, due }))
}
