//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for policy providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated by name at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(POLICY_PROVIDERS)]
//! │                        static ENTRY: PolicyProviderEntry = ...  │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static POLICY_PROVIDERS: [..] = [..] │
//! │                              ↓                                  │
//! │  3. Resolver queries:  POLICY_PROVIDERS.iter()                  │
//! │                              ↓                                  │
//! │  4. Config selects:    "PCB_POLICY_PROVIDER=memory"             │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in pcb-providers)
//!
//! ```ignore
//! use pcb_application::ports::registry::{instantiate, PolicyProviderEntry, POLICY_PROVIDERS};
//!
//! #[linkme::distributed_slice(POLICY_PROVIDERS)]
//! static IN_MEMORY_PROVIDER: PolicyProviderEntry = PolicyProviderEntry {
//!     name: "memory",
//!     description: "In-memory policy provider",
//!     factory: instantiate::<InMemoryPolicyProvider>,
//! };
//! ```
//!
//! ### Resolving a Provider
//!
//! ```ignore
//! use pcb_application::ports::registry::resolve_policy_provider;
//!
//! let provider = resolve_policy_provider("memory")?;
//! ```

pub mod policy;

pub use policy::{
    POLICY_PROVIDERS, PolicyProviderEntry, ProviderFactory, instantiate, list_policy_providers,
    resolve_policy_provider,
};
