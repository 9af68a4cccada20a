//! Domain Layer - Policy Config Broker
//!
//! Core types and contracts of the policy-provider subsystem. Nothing in this
//! crate knows how providers are discovered or how policy statements are
//! stored; it only fixes the shapes every layer agrees on.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`value_objects`] | `ContextId`, `LifecycleState`, `Permission`, `PolicySnapshot` |
//! | [`ports`] | Provider, configuration and ambient-context traits |
//! | [`handle`] | `ProviderHandle` and the decoration chain walker |
//! | [`constants`] | Setting names and reserved identifiers |
//!
//! ## Lifecycle
//!
//! ```text
//!               get_or_create
//!  (nonexistent) ───────────▶ open ──commit──▶ inService
//!                              ▲  ◀──get_or_create──┘
//!                              │                    │
//!               get_or_create  │        delete      │
//!                              └───── deleted ◀─────┘
//! ```

pub mod constants;
pub mod error;
pub mod handle;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, ConfigurationFailure, Error, Result};
pub use handle::{DecorationChain, ProviderHandle};
pub use ports::*;
pub use value_objects::*;
