//! Ambient context port

use crate::value_objects::ContextId;

/// Read-only view of the context id associated with the caller
///
/// Implementations decide where the association lives (thread-local, task
/// local, request extension). Returning `None` means the caller is not
/// running inside any policy context.
pub trait AmbientContext: Send + Sync {
    /// Context id bound to the current caller, if any
    fn current_context_id(&self) -> Option<ContextId>;
}

/// Collaborator for hosts that never bind an ambient context
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmbientContext;

impl AmbientContext for NoAmbientContext {
    fn current_context_id(&self) -> Option<ContextId> {
        None
    }
}
