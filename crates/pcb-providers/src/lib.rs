//! # Provider Implementations
//!
//! Concrete implementations of the policy provider ports defined in `pcb-domain`.
//!
//! ## Available Providers
//!
//! | Registry name | Type | Description |
//! |---------------|------|-------------|
//! | `memory` | [`InMemoryPolicyProvider`] | Process-local policy contexts |
//! | `traced-memory` | [`TracingPolicyProvider`] | Tracing decorator over a fresh in-memory provider |
//!
//! ## Ambient Context
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ThreadContext`] | Context id bound to the current thread through a scope guard |
//!
//! ## Registration
//!
//! Providers register themselves in `pcb_application::ports::registry::POLICY_PROVIDERS`
//! via `linkme`. A binary only sees them if this crate is linked, so hosts that
//! never name a type from here should still `use pcb_providers as _;`.

pub mod ambient;
pub mod constants;
pub mod policy;

pub use ambient::{ContextGuard, ThreadContext};
pub use policy::{InMemoryPolicyConfiguration, InMemoryPolicyProvider, TracingPolicyProvider};
