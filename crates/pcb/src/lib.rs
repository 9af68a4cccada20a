//! # Policy Config Broker
//!
//! Process-wide discovery and sharing of a policy configuration provider.
//!
//! A host names the provider it wants (`memory`, `traced-memory`, or any
//! provider another crate registers), the broker instantiates it once on
//! first use and every caller shares that instance from then on.
//!
//! ## Example
//!
//! ```ignore
//! use pcb::infrastructure::{ConfigLoader, install_from_config, logging::init_logging};
//! use pcb::{ContextId, Permission};
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//! install_from_config(&config)?;
//!
//! let provider = pcb::policy_provider()?;
//! let orders = provider.get_or_create(&ContextId::new("orders")?, false)?;
//! orders.add_to_role("clerk", &[Permission::new("web-resource", "/orders/*")])?;
//! orders.commit()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Provider and configuration ports, handles, errors
//! - `application` - Provider discovery table and the singleton registry
//! - `infrastructure` - Configuration, logging and registry bootstrap
//! - `providers` - In-memory provider, tracing decorator, ambient context

/// Domain layer - ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use pcb_domain::*;
}

/// Application layer - discovery table and provider registry
pub mod application {
    pub use pcb_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use pcb_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use pcb_providers::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registry entry points at the crate root
pub use application::{ProviderRegistry, policy_provider, set_policy_provider};
