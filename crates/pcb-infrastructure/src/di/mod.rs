//! Registry bootstrap
//!
//! Turns loaded configuration into a provider registry and, optionally,
//! installs it as the process-wide one.

pub mod bootstrap;

pub use bootstrap::{build_registry, install_from_config};
