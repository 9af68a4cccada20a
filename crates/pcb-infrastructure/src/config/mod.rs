//! Configuration
//!
//! Layered with Figment: built-in defaults, then a TOML file, then
//! `PCB_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, PolicySettings};
