//! Application Layer - Policy Config Broker
//!
//! Discovery and sharing of the process-wide policy provider.
//!
//! ## Architecture
//!
//! The application layer:
//! - Declares the provider discovery table that provider crates register into
//! - Owns the singleton slot holding the active provider
//! - Has no dependencies on concrete providers or infrastructure
//!
//! ## Ports (Interfaces)
//!
//! - `ports::registry::*`: discovery table of named zero-argument factories
//! - `ports::discovery::*`: where the configured provider name comes from
//!
//! ## Use Cases
//!
//! - `use_cases::provider_registry`: resolve, replace and share the provider
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `pcb-domain`: For provider ports, handles and errors
//! - `linkme`, `arc-swap`, `parking_lot` and `tracing`

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
