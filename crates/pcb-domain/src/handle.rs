//! Provider Handle
//!
//! Shared reference to a policy provider. Decorators keep the handle they
//! wrap for their whole life, so the chain below any handle is fixed once it
//! is built and can never loop back on itself.
//!
//! ```text
//! ProviderHandle ──wrapped()──▶ ProviderHandle ──wrapped()──▶ ProviderHandle ──▶ None
//!   (tracing)                     (auditing)                    (in-memory)
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::ports::provider::PolicyConfigurationProvider;

/// Clonable reference to a policy provider
///
/// Two handles are the same provider iff [`ProviderHandle::ptr_eq`] holds.
#[derive(Clone)]
pub struct ProviderHandle {
    provider: Arc<dyn PolicyConfigurationProvider>,
}

impl ProviderHandle {
    /// Wrap a provider value in a new handle
    pub fn new<P>(provider: P) -> Self
    where
        P: PolicyConfigurationProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Build a handle around an already shared provider
    pub fn from_arc(provider: Arc<dyn PolicyConfigurationProvider>) -> Self {
        Self { provider }
    }

    /// Shared provider behind the handle
    pub fn as_arc(&self) -> &Arc<dyn PolicyConfigurationProvider> {
        &self.provider
    }

    /// Whether both handles point at the same provider instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.provider), Arc::as_ptr(&other.provider))
    }

    /// Walk the decoration chain, starting with this handle
    pub fn decoration_chain(&self) -> DecorationChain<'_> {
        DecorationChain { next: Some(self) }
    }

    /// The undecorated provider at the end of the chain
    pub fn innermost(&self) -> &ProviderHandle {
        let mut current = self;
        while let Some(inner) = current.provider.wrapped() {
            current = inner;
        }
        current
    }

    /// Number of decorators stacked on top of the innermost provider
    pub fn decoration_depth(&self) -> usize {
        self.decoration_chain().count() - 1
    }
}

impl Deref for ProviderHandle {
    type Target = dyn PolicyConfigurationProvider;

    fn deref(&self) -> &Self::Target {
        self.provider.as_ref()
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: Vec<&str> = self
            .decoration_chain()
            .map(|handle| handle.provider_name())
            .collect();
        f.debug_struct("ProviderHandle")
            .field("provider", &self.provider_name())
            .field("chain", &chain)
            .finish()
    }
}

impl<P> From<Arc<P>> for ProviderHandle
where
    P: PolicyConfigurationProvider + 'static,
{
    fn from(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

/// Iterator over a handle and every handle it decorates, outermost first
pub struct DecorationChain<'a> {
    next: Option<&'a ProviderHandle>,
}

impl<'a> Iterator for DecorationChain<'a> {
    type Item = &'a ProviderHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.provider.wrapped();
        Some(current)
    }
}
