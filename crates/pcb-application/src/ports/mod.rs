//! Application ports
//!
//! - [`registry`]: compile-time discovery table of policy providers
//! - [`discovery`]: source of the configured provider name

pub mod discovery;
pub mod registry;

pub use discovery::{EnvProviderSource, ProviderNameSource, StaticProviderSource};
pub use registry::{
    POLICY_PROVIDERS, PolicyProviderEntry, ProviderFactory, instantiate, list_policy_providers,
    resolve_policy_provider,
};
