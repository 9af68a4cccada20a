//! In-memory policy provider implementation
//!
//! Keeps every policy context of the process in a concurrent map. Contexts
//! live as long as the provider; `delete` retires a context but keeps its
//! handle, so a later `get_or_create` reopens the very same object.
//!
//! ## Example
//!
//! ```ignore
//! use pcb_providers::InMemoryPolicyProvider;
//!
//! let provider = InMemoryPolicyProvider::new();
//! let orders = provider.get_or_create(&"orders".parse()?, false)?;
//! orders.add_to_role("clerk", &[Permission::new("web-resource", "/orders/*")])?;
//! orders.commit()?;
//! assert!(provider.is_in_service(&"orders".parse()?)?);
//! ```

use std::sync::Arc;

use pcb_application::ports::registry::{POLICY_PROVIDERS, PolicyProviderEntry, instantiate};
use pcb_domain::error::Result;
use pcb_domain::ports::{AmbientContext, PolicyConfiguration, PolicyConfigurationProvider};
use pcb_domain::value_objects::ContextId;
use tracing::debug;

use super::configuration::InMemoryPolicyConfiguration;
use super::store::PolicyStore;
use crate::ambient::ThreadContext;
use crate::constants::IN_MEMORY_PROVIDER_NAME;

/// In-memory policy provider
///
/// Uses one `DashMap` entry per context id. The entry's shard lock makes
/// concurrent `get_or_create` calls for the same id agree on one handle while
/// calls for ids in other shards run in parallel.
pub struct InMemoryPolicyProvider {
    store: Arc<PolicyStore>,
    ambient: Arc<dyn AmbientContext>,
}

impl InMemoryPolicyProvider {
    /// Create a provider bound to the thread-local ambient context
    pub fn new() -> Self {
        Self::with_ambient_context(Arc::new(ThreadContext))
    }

    /// Create a provider that reads the ambient context id from `ambient`
    pub fn with_ambient_context(ambient: Arc<dyn AmbientContext>) -> Self {
        Self {
            store: Arc::new(PolicyStore::default()),
            ambient,
        }
    }

    /// Number of contexts ever created and not dropped with the provider
    pub fn context_count(&self) -> usize {
        self.store.contexts.len()
    }

    /// Ids of all known contexts, sorted
    pub fn context_ids(&self) -> Vec<ContextId> {
        let mut ids: Vec<ContextId> = self
            .store
            .contexts
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }

    fn lookup(&self, context_id: &ContextId) -> Option<Arc<InMemoryPolicyConfiguration>> {
        self.store.context(context_id)
    }
}

impl Default for InMemoryPolicyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyConfigurationProvider for InMemoryPolicyProvider {
    fn provider_name(&self) -> &str {
        IN_MEMORY_PROVIDER_NAME
    }

    fn get_or_create(
        &self,
        context_id: &ContextId,
        remove: bool,
    ) -> Result<Arc<dyn PolicyConfiguration>> {
        let mut created = false;
        let configuration = {
            let entry = self
                .store
                .contexts
                .entry(context_id.clone())
                .or_insert_with(|| {
                    created = true;
                    Arc::new(InMemoryPolicyConfiguration::new(
                        context_id.clone(),
                        Arc::downgrade(&self.store),
                    ))
                });
            Arc::clone(entry.value())
        };

        if created {
            debug!(context_id = %context_id, "Policy context created");
        } else {
            let previous = configuration.reopen(remove);
            debug!(
                context_id = %context_id,
                previous = %previous,
                remove,
                "Policy context reopened"
            );
        }
        Ok(configuration)
    }

    fn get_if_present(
        &self,
        context_id: &ContextId,
    ) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        Ok(self
            .lookup(context_id)
            .map(|configuration| configuration as Arc<dyn PolicyConfiguration>))
    }

    fn get_for_ambient_context(&self) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        match self.ambient.current_context_id() {
            Some(context_id) => self.get_if_present(&context_id),
            None => Ok(None),
        }
    }

    fn is_in_service(&self, context_id: &ContextId) -> Result<bool> {
        Ok(self
            .lookup(context_id)
            .is_some_and(|configuration| configuration.in_service()))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(POLICY_PROVIDERS)]
static IN_MEMORY_PROVIDER: PolicyProviderEntry = PolicyProviderEntry {
    name: IN_MEMORY_PROVIDER_NAME,
    description: "Process-local policy contexts held in a concurrent map",
    factory: instantiate::<InMemoryPolicyProvider>,
};
