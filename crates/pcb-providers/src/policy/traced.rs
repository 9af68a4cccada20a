//! Tracing decorator
//!
//! Wraps any provider and records each lifecycle call as a `tracing` span,
//! with the outcome logged inside it. Behaviour is otherwise identical to the
//! wrapped provider: handles, errors and identities pass through untouched.

use std::sync::Arc;

use pcb_application::ports::registry::{POLICY_PROVIDERS, PolicyProviderEntry, instantiate};
use pcb_domain::error::Result;
use pcb_domain::handle::ProviderHandle;
use pcb_domain::ports::{PolicyConfiguration, PolicyConfigurationProvider};
use pcb_domain::value_objects::ContextId;
use tracing::{debug, debug_span, warn};

use super::in_memory::InMemoryPolicyProvider;
use crate::constants::{TRACED_MEMORY_PROVIDER_NAME, TRACING_DECORATOR_NAME};

/// Provider decorator emitting a span per call
pub struct TracingPolicyProvider {
    inner: ProviderHandle,
}

impl TracingPolicyProvider {
    /// Decorate `inner`
    pub fn new(inner: ProviderHandle) -> Self {
        Self { inner }
    }
}

impl Default for TracingPolicyProvider {
    /// Decorates a fresh in-memory provider
    fn default() -> Self {
        Self::new(ProviderHandle::new(InMemoryPolicyProvider::new()))
    }
}

fn log_outcome<T>(result: &Result<T>) {
    match result {
        Ok(_) => debug!("ok"),
        Err(err) => warn!(error = %err, "failed"),
    }
}

impl PolicyConfigurationProvider for TracingPolicyProvider {
    fn provider_name(&self) -> &str {
        TRACING_DECORATOR_NAME
    }

    fn get_or_create(
        &self,
        context_id: &ContextId,
        remove: bool,
    ) -> Result<Arc<dyn PolicyConfiguration>> {
        let span = debug_span!(
            "policy.get_or_create",
            provider = self.inner.provider_name(),
            context_id = %context_id,
            remove
        );
        let _entered = span.enter();
        let result = self.inner.get_or_create(context_id, remove);
        log_outcome(&result);
        result
    }

    fn get_if_present(
        &self,
        context_id: &ContextId,
    ) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        let span = debug_span!(
            "policy.get_if_present",
            provider = self.inner.provider_name(),
            context_id = %context_id
        );
        let _entered = span.enter();
        let result = self.inner.get_if_present(context_id);
        if let Ok(found) = &result {
            debug!(found = found.is_some(), "lookup finished");
        }
        log_outcome(&result);
        result
    }

    fn get_for_ambient_context(&self) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        let span = debug_span!(
            "policy.get_for_ambient_context",
            provider = self.inner.provider_name()
        );
        let _entered = span.enter();
        let result = self.inner.get_for_ambient_context();
        if let Ok(found) = &result {
            debug!(found = found.is_some(), "lookup finished");
        }
        log_outcome(&result);
        result
    }

    fn is_in_service(&self, context_id: &ContextId) -> Result<bool> {
        let span = debug_span!(
            "policy.is_in_service",
            provider = self.inner.provider_name(),
            context_id = %context_id
        );
        let _entered = span.enter();
        let result = self.inner.is_in_service(context_id);
        log_outcome(&result);
        result
    }

    fn wrapped(&self) -> Option<&ProviderHandle> {
        Some(&self.inner)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(POLICY_PROVIDERS)]
static TRACED_MEMORY_PROVIDER: PolicyProviderEntry = PolicyProviderEntry {
    name: TRACED_MEMORY_PROVIDER_NAME,
    description: "Tracing decorator over a fresh in-memory provider",
    factory: instantiate::<TracingPolicyProvider>,
};
