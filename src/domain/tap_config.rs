//! Raw `tap.yaml` document model.
//!
//! Sections mirror the on-disk mapping. Unknown keys are ignored so taps can
//! carry extraction settings this tool has no interest in.

use serde::Deserialize;

/// Root directory holding one subdirectory per tap.
pub const TAPS_DIR: &str = "taps";

/// Per-tap configuration file name.
pub const TAP_FILE: &str = "tap.yaml";

/// Parsed `tap.yaml` document. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TapConfig {
    /// When the tap should run.
    #[serde(default)]
    pub schedule: ScheduleSection,
    /// What compute shape the tap's job needs.
    #[serde(default)]
    pub runner: RunnerSection,
    /// Extraction settings; only the timeout matters to the orchestrator.
    #[serde(default)]
    pub extract: ExtractSection,
}

/// `schedule:` section with documented per-field defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    #[serde(default = "default_frequency")]
    pub frequency: String,
    /// Weekday 0-6 (Monday=0) for weekly, day of month 1-31 for monthly.
    #[serde(default = "default_day")]
    pub day: u32,
    /// Target run time as `HH:MM`.
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            day: default_day(),
            time: default_time(),
            enabled: default_enabled(),
        }
    }
}

fn default_frequency() -> String {
    "monthly".to_string()
}

fn default_day() -> u32 {
    1
}

fn default_time() -> String {
    "02:00".to_string()
}

fn default_enabled() -> bool {
    true
}

/// `runner:` section with documented per-field defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerSection {
    #[serde(default = "default_server_type")]
    pub server_type: String,
    #[serde(default = "default_architecture")]
    pub architecture: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            server_type: default_server_type(),
            architecture: default_architecture(),
            image: default_image(),
            location: default_location(),
        }
    }
}

fn default_server_type() -> String {
    "cx22".to_string()
}

fn default_architecture() -> String {
    "x86".to_string()
}

fn default_image() -> String {
    "ubuntu-24.04".to_string()
}

fn default_location() -> String {
    "nbg1".to_string()
}

/// `extract:` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractSection {
    #[serde(default = "default_timeout_minutes")]
    pub timeout_minutes: u32,
}

impl Default for ExtractSection {
    fn default() -> Self {
        Self { timeout_minutes: default_timeout_minutes() }
    }
}

fn default_timeout_minutes() -> u32 {
    30
}
