//! Thread-bound ambient context
//!
//! ```ignore
//! let _guard = ThreadContext::enter("orders".parse()?);
//! // calls on this thread now see "orders" as their ambient context
//! let configuration = provider.get_for_ambient_context()?;
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;

use pcb_domain::ports::AmbientContext;
use pcb_domain::value_objects::ContextId;

thread_local! {
    static CURRENT_CONTEXT: RefCell<Option<ContextId>> = const { RefCell::new(None) };
}

/// Ambient context stored in a thread-local
///
/// Zero-sized; every instance reads the calling thread's binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadContext;

impl ThreadContext {
    /// Bind `context_id` to the current thread until the guard drops
    ///
    /// Guards nest: dropping the inner guard restores the outer binding.
    pub fn enter(context_id: ContextId) -> ContextGuard {
        let previous = CURRENT_CONTEXT.with(|current| current.replace(Some(context_id)));
        ContextGuard {
            previous,
            _not_send: PhantomData,
        }
    }

    /// Context id bound to the current thread
    pub fn current() -> Option<ContextId> {
        CURRENT_CONTEXT.with(|current| current.borrow().clone())
    }
}

impl AmbientContext for ThreadContext {
    fn current_context_id(&self) -> Option<ContextId> {
        Self::current()
    }
}

/// Restores the previous thread binding when dropped
///
/// Not `Send`: it must be dropped on the thread that created it.
#[must_use = "the binding is undone as soon as the guard is dropped"]
pub struct ContextGuard {
    previous: Option<ContextId>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT_CONTEXT.with(|current| current.replace(previous));
    }
}
