//! Runner provisioning spec emitted for the job launcher.

use serde::Serialize;

use crate::domain::tap_config::TapConfig;

/// Compute shape a tap's job should execute on.
///
/// Field order is the wire order of the emitted JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerSpec {
    pub server_type: String,
    pub architecture: String,
    pub image: String,
    pub location: String,
    pub timeout_minutes: u32,
}

impl RunnerSpec {
    /// Project the runner shape out of a tap document, defaults already
    /// applied per field.
    pub fn from_config(config: &TapConfig) -> Self {
        Self {
            server_type: config.runner.server_type.clone(),
            architecture: config.runner.architecture.clone(),
            image: config.runner.image.clone(),
            location: config.runner.location.clone(),
            timeout_minutes: config.extract.timeout_minutes,
        }
    }
}
