//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the techsphere crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "techsphere=debug",
            LogLevel::Info => "techsphere=info",
            LogLevel::Warn => "techsphere=warn",
            LogLevel::Error => "techsphere=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
