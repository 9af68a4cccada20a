//! Policy configuration port
//!
//! The handle a provider returns for one policy context. Editing operations
//! are only accepted while the context is `open`; the provider's
//! `get_or_create` is the only way back to `open` from the other states.

use crate::error::Result;
use crate::value_objects::{ContextId, LifecycleState, Permission, PolicySnapshot};

/// Handle to the policy statements of a single context
///
/// Providers guarantee one live handle per context id, so two handles for the
/// same id compare equal under `Arc::ptr_eq`.
pub trait PolicyConfiguration: Send + Sync {
    /// Identifier of the context this handle manages
    fn context_id(&self) -> &ContextId;

    /// Current lifecycle state
    fn state(&self) -> LifecycleState;

    /// Whether the context is committed and in effect
    fn in_service(&self) -> bool {
        self.state().is_in_service()
    }

    /// Grant `permissions` to `role`
    fn add_to_role(&self, role: &str, permissions: &[Permission]) -> Result<()>;

    /// Grant `permissions` to every caller
    fn add_to_unchecked_policy(&self, permissions: &[Permission]) -> Result<()>;

    /// Deny `permissions` to every caller
    fn add_to_excluded_policy(&self, permissions: &[Permission]) -> Result<()>;

    /// Drop all permissions of `role`; `"*"` drops every role
    fn remove_role(&self, role: &str) -> Result<()>;

    /// Drop every unchecked permission
    fn remove_unchecked_policy(&self) -> Result<()>;

    /// Drop every excluded permission
    fn remove_excluded_policy(&self) -> Result<()>;

    /// Link this context with another context of the same provider
    ///
    /// Linked contexts share their principal-to-role mapping. The relation is
    /// symmetric; linking a context to itself or to a deleted context is
    /// rejected.
    fn link_configuration(&self, other: &ContextId) -> Result<()>;

    /// Contexts currently linked to this one, sorted
    fn linked_contexts(&self) -> Vec<ContextId>;

    /// Put the context in service
    fn commit(&self) -> Result<()>;

    /// Retire the context, dropping its statements and linkages
    fn delete(&self) -> Result<()>;

    /// Consistent copy of the current statements
    fn snapshot(&self) -> PolicySnapshot;
}
