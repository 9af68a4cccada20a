//! Root configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, PolicySettings};

/// Main application configuration
///
/// ```toml
/// [policy]
/// provider = "memory"
/// trace_calls = false
///
/// [logging]
/// level = "info"
/// json_format = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Policy provider selection
    pub policy: PolicySettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}
