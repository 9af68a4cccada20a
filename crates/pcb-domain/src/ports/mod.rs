//! Domain Port Interfaces
//!
//! Contracts implemented outside the domain:
//!
//! - [`PolicyConfigurationProvider`]: hands out configuration handles per context
//! - [`PolicyConfiguration`]: the handle through which a context is edited
//! - [`AmbientContext`]: reports the context id bound to the calling thread

pub mod ambient;
pub mod configuration;
pub mod provider;

pub use ambient::{AmbientContext, NoAmbientContext};
pub use configuration::PolicyConfiguration;
pub use provider::PolicyConfigurationProvider;
