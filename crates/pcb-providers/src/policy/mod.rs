//! Policy provider implementations
//!
//! - [`in_memory`]: keyed store of configurations with the full lifecycle
//! - [`traced`]: decorator logging every call of the provider it wraps

mod configuration;
mod store;

pub mod in_memory;
pub mod traced;

pub use configuration::InMemoryPolicyConfiguration;
pub use in_memory::InMemoryPolicyProvider;
pub use traced::TracingPolicyProvider;
