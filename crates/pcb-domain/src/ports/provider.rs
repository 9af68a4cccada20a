//! Policy configuration provider port
//!
//! ## State machine per context id
//!
//! | Call | nonexistent | open | inService | deleted |
//! |------|-------------|------|-----------|---------|
//! | `get_or_create(id, _)` | → open (new handle) | open | → open | → open |
//! | `get_if_present(id)` | `None` | handle | handle | handle |
//! | `is_in_service(id)` | false | false | true | false |
//!
//! `get_or_create(id, true)` additionally clears the statements and
//! linkages of an existing context while keeping the same handle.

use std::sync::Arc;

use crate::error::Result;
use crate::handle::ProviderHandle;
use crate::ports::configuration::PolicyConfiguration;
use crate::value_objects::ContextId;

/// Pluggable implementation managing policy contexts
///
/// Implementations registered for discovery must also implement `Default`,
/// which is the zero-argument construction path used by the registry.
///
/// Concurrent `get_or_create` calls for the same id must never produce two
/// handles; calls for different ids should not serialize against each other.
pub trait PolicyConfigurationProvider: Send + Sync {
    /// Short name used in logs and diagnostics
    fn provider_name(&self) -> &str;

    /// Return the handle for `context_id`, creating it if needed
    ///
    /// The context ends up `open`. With `remove` set, an existing context
    /// also loses its statements and linkages. Never returns absent.
    fn get_or_create(
        &self,
        context_id: &ContextId,
        remove: bool,
    ) -> Result<Arc<dyn PolicyConfiguration>>;

    /// Return the handle for `context_id` if the context exists
    ///
    /// Never creates a context and never changes its state.
    fn get_if_present(
        &self,
        context_id: &ContextId,
    ) -> Result<Option<Arc<dyn PolicyConfiguration>>>;

    /// Return the handle of the context bound to the caller, if it exists
    fn get_for_ambient_context(&self) -> Result<Option<Arc<dyn PolicyConfiguration>>>;

    /// Whether `context_id` exists and is exactly `inService`
    fn is_in_service(&self, context_id: &ContextId) -> Result<bool>;

    /// Provider this one decorates, if any
    fn wrapped(&self) -> Option<&ProviderHandle> {
        None
    }
}
