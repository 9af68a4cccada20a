//! Value Objects
//!
//! Immutable types that describe policy contexts and their statements.

pub mod context;
pub mod permission;
pub mod snapshot;

pub use context::{ContextId, LifecycleState};
pub use permission::Permission;
pub use snapshot::PolicySnapshot;
