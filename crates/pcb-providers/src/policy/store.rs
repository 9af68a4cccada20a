//! Shared state of an in-memory provider
//!
//! Lock order, outermost first: configuration state → context shard → link
//! table. The provider never holds a context shard while locking a
//! configuration, so the order is never inverted.
//!
//! Linking holds the state locks of both contexts at once. Those two are
//! taken in ascending `ContextId` order, so handles linking each other
//! cannot deadlock. `delete` and `reopen` unlink under their own state lock,
//! which makes a link and a concurrent delete of either side serialize.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use pcb_domain::error::{Error, Result};
use pcb_domain::value_objects::ContextId;

use super::configuration::InMemoryPolicyConfiguration;

/// Context map plus the linkage relation between contexts
#[derive(Default)]
pub(crate) struct PolicyStore {
    /// One configuration per context id; the shard lock serializes creators
    pub(crate) contexts: DashMap<ContextId, Arc<InMemoryPolicyConfiguration>>,
    /// Symmetric linkage relation, both directions stored
    links: Mutex<BTreeMap<ContextId, BTreeSet<ContextId>>>,
}

impl PolicyStore {
    /// Configuration registered under `context_id`
    pub(crate) fn context(
        &self,
        context_id: &ContextId,
    ) -> Option<Arc<InMemoryPolicyConfiguration>> {
        self.contexts
            .get(context_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Record a link between two contexts in both directions
    ///
    /// Callers hold the state locks of both contexts and have checked their
    /// lifecycle states.
    pub(crate) fn link(&self, context_id: &ContextId, other: &ContextId) -> Result<()> {
        if context_id == other {
            return Err(Error::invalid_argument(format!(
                "policy context '{context_id}' cannot be linked to itself"
            )));
        }

        let mut links = self.links.lock();
        links
            .entry(context_id.clone())
            .or_default()
            .insert(other.clone());
        links
            .entry(other.clone())
            .or_default()
            .insert(context_id.clone());
        Ok(())
    }

    /// Remove every linkage touching `context_id`
    pub(crate) fn unlink_all(&self, context_id: &ContextId) {
        let mut links = self.links.lock();
        let Some(peers) = links.remove(context_id) else {
            return;
        };
        for peer in peers {
            if let Some(back) = links.get_mut(&peer) {
                back.remove(context_id);
                if back.is_empty() {
                    links.remove(&peer);
                }
            }
        }
    }

    /// Contexts linked to `context_id`
    pub(crate) fn linked(&self, context_id: &ContextId) -> BTreeSet<ContextId> {
        self.links
            .lock()
            .get(context_id)
            .cloned()
            .unwrap_or_default()
    }
}
