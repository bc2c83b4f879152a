//! Tap schedule model and the due predicate.

use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};
use thiserror::Error;

use crate::domain::tap_config::ScheduleSection;

/// How often a tap is meant to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    /// Only runs on an explicit external trigger.
    Manual,
    /// Anything else found in `tap.yaml`. Never due; the caller decides how
    /// to report it.
    Unknown(String),
}

impl Frequency {
    pub fn parse(value: &str) -> Self {
        match value {
            "hourly" => Frequency::Hourly,
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "monthly" => Frequency::Monthly,
            "manual" => Frequency::Manual,
            other => Frequency::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Hourly => write!(f, "hourly"),
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Manual => write!(f, "manual"),
            Frequency::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// Schedule section content that cannot be interpreted.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// `time` is not an `HH:MM` pair of integers.
    #[error("Invalid schedule time '{0}': expected HH:MM")]
    InvalidTime(String),
}

/// A tap's schedule with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub frequency: Frequency,
    /// Weekday 0-6 (Monday=0) for weekly, day of month 1-31 for monthly;
    /// unused otherwise.
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub enabled: bool,
}

impl Schedule {
    /// Build a schedule from the raw `schedule:` section of `tap.yaml`.
    pub fn from_section(section: &ScheduleSection) -> Result<Self, ScheduleError> {
        let (hour, minute) = parse_time(&section.time)?;
        Ok(Self {
            frequency: Frequency::parse(&section.frequency),
            day: section.day,
            hour,
            minute,
            enabled: section.enabled,
        })
    }

    /// Whether the tap should run at `now`.
    ///
    /// Matching is hour-granular: `minute` is carried for diagnostics but
    /// never compared. Weekly `day` follows the Monday=0 weekday numbering.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return false;
        }

        if now.hour() != self.hour {
            return false;
        }

        match &self.frequency {
            Frequency::Hourly => true,
            // Hour already matched above.
            Frequency::Daily => true,
            Frequency::Weekly => now.weekday().num_days_from_monday() == self.day,
            Frequency::Monthly => now.day() == self.day,
            Frequency::Manual => false,
            Frequency::Unknown(_) => false,
        }
    }
}

fn parse_time(value: &str) -> Result<(u32, u32), ScheduleError> {
    let Some((hour, minute)) = value.split_once(':') else {
        return Err(ScheduleError::InvalidTime(value.to_string()));
    };

    let hour = hour.trim().parse().map_err(|_| ScheduleError::InvalidTime(value.to_string()))?;
    let minute =
        minute.trim().parse().map_err(|_| ScheduleError::InvalidTime(value.to_string()))?;
    Ok((hour, minute))
}
