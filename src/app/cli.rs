//! CLI adapter.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::app::commands::{due::TapEvaluation, output};
use crate::domain::{AppError, Frequency};

#[derive(Parser)]
#[command(name = "tapctl")]
#[command(version)]
#[command(
    about = "Workflow primitives for scheduled tap execution",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List taps due to run as a JSON array of tap ids
    Due {
        /// Evaluate schedules at this UTC instant instead of now (RFC 3339)
        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<String>,
    },
    /// Print a tap's runner provisioning config as JSON
    RunnerConfig {
        /// Tap id (directory name under taps/)
        tap_id: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Due { now } => run_due(now.as_deref()),
        Commands::RunnerConfig { tap_id } => run_runner_config(&tap_id),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_due(now: Option<&str>) -> Result<(), AppError> {
    let now = resolve_now(now)?;
    let report = crate::find_due_taps(now)?;

    for eval in &report.evaluations {
        match eval {
            TapEvaluation::Evaluated { tap_id, schedule, due } => {
                if let Frequency::Unknown(name) = &schedule.frequency {
                    eprintln!("Warning: unknown frequency '{}' for {}", name, tap_id);
                }
                let (mark, verdict) = if *due { ("✓", "is due") } else { ("✗", "not due yet") };
                eprintln!(
                    "{} {} {} (frequency={}, time={:02}:{:02})",
                    mark, tap_id, verdict, schedule.frequency, schedule.hour, schedule.minute
                );
            }
            TapEvaluation::Skipped { tap_id, reason } => {
                eprintln!("Error processing {}: {}", tap_id, reason);
            }
        }
    }

    let due_ids = report.due_ids();
    output::write_workflow_output(&due_ids)?;

    eprintln!();
    eprintln!(
        "Found {} tap(s) due to run at {}",
        due_ids.len(),
        report.now.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

fn run_runner_config(tap_id: &str) -> Result<(), AppError> {
    let spec = crate::runner_config(tap_id)?;
    output::write_workflow_output(&spec)
}

fn resolve_now(value: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match value {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|_| AppError::InvalidTimestamp(raw.to_string())),
        None => Ok(Utc::now()),
    }
}
