//! Use cases
//!
//! - [`provider_registry`]: process-wide policy provider singleton

pub mod provider_registry;

pub use provider_registry::{
    ProviderDecorator, ProviderRegistry, policy_provider, set_policy_provider,
};
