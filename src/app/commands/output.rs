//! Canonical workflow output helper.
//!
//! Writes compact single-line JSON to stdout, and appends `json=<...>` to
//! `GITHUB_OUTPUT` when that variable is set, so workflow steps can consume
//! the result without scraping the log.

use std::io::Write;

use serde::Serialize;

use crate::domain::AppError;

/// Write workflow command output in canonical format.
///
/// Diagnostics belong on stderr; this is the only thing a command prints to
/// stdout.
///
/// # Errors
/// Returns an error if JSON serialization fails or file I/O fails.
pub fn write_workflow_output<T: Serialize>(output: &T) -> Result<(), AppError> {
    let json = serde_json::to_string(output).map_err(|e| {
        AppError::InternalError(format!("Failed to serialize workflow output: {}", e))
    })?;

    // Value must not contain newlines; GITHUB_OUTPUT is line-oriented.
    debug_assert!(!json.contains('\n'), "workflow output JSON must be single-line");

    println!("{}", json);

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let mut file =
            std::fs::OpenOptions::new().create(true).append(true).open(&path).map_err(|e| {
                AppError::InternalError(format!("Failed to open GITHUB_OUTPUT: {}", e))
            })?;

        writeln!(file, "json={}", json).map_err(|e| {
            AppError::InternalError(format!("Failed to write GITHUB_OUTPUT: {}", e))
        })?;
    }

    Ok(())
}
