//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `pcb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "pcb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "pcb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PCB";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "PCB_LOG";

/// File name prefix for rotated log files
pub const LOG_FILE_PREFIX: &str = "pcb";
