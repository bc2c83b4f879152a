pub mod due;
pub mod output;
pub mod runner_config;
