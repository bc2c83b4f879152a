pub mod error;
pub mod runner;
pub mod schedule;
pub mod tap_config;

pub use error::AppError;
pub use runner::RunnerSpec;
pub use schedule::{Frequency, Schedule, ScheduleError};
pub use tap_config::{ExtractSection, RunnerSection, ScheduleSection, TAP_FILE, TAPS_DIR, TapConfig};
