//! In-memory policy configuration handle

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Weak;

use parking_lot::{Mutex, MutexGuard};
use pcb_domain::constants::ALL_ROLES;
use pcb_domain::error::{Error, Result};
use pcb_domain::ports::PolicyConfiguration;
use pcb_domain::value_objects::{ContextId, LifecycleState, Permission, PolicySnapshot};
use tracing::debug;

use super::store::PolicyStore;

/// Statements and lifecycle state of one context
#[derive(Debug)]
struct ConfigurationState {
    lifecycle: LifecycleState,
    role_permissions: BTreeMap<String, BTreeSet<Permission>>,
    unchecked: BTreeSet<Permission>,
    excluded: BTreeSet<Permission>,
}

impl ConfigurationState {
    fn new() -> Self {
        Self {
            lifecycle: LifecycleState::Open,
            role_permissions: BTreeMap::new(),
            unchecked: BTreeSet::new(),
            excluded: BTreeSet::new(),
        }
    }

    fn clear_statements(&mut self) {
        self.role_permissions.clear();
        self.unchecked.clear();
        self.excluded.clear();
    }
}

/// Configuration handle handed out by `InMemoryPolicyProvider`
///
/// Holds a weak reference back to the provider's store for linkage
/// bookkeeping; the store owns the handle, not the other way round.
pub struct InMemoryPolicyConfiguration {
    context_id: ContextId,
    state: Mutex<ConfigurationState>,
    store: Weak<PolicyStore>,
}

impl InMemoryPolicyConfiguration {
    pub(crate) fn new(context_id: ContextId, store: Weak<PolicyStore>) -> Self {
        Self {
            context_id,
            state: Mutex::new(ConfigurationState::new()),
            store,
        }
    }

    /// Move back to `open`, optionally dropping statements and linkages
    ///
    /// Returns the state the context was in before.
    pub(crate) fn reopen(&self, remove: bool) -> LifecycleState {
        let mut state = self.state.lock();
        let previous = state.lifecycle;
        state.lifecycle = LifecycleState::Open;
        if remove {
            state.clear_statements();
            if let Some(store) = self.store.upgrade() {
                store.unlink_all(&self.context_id);
            }
        }
        previous
    }

    /// Lock the state, failing unless the context is `open`
    fn editable(&self, operation: &'static str) -> Result<MutexGuard<'_, ConfigurationState>> {
        let state = self.state.lock();
        if state.lifecycle.is_open() {
            Ok(state)
        } else {
            Err(Error::invalid_state(
                &self.context_id,
                state.lifecycle,
                operation,
            ))
        }
    }
}

impl fmt::Debug for InMemoryPolicyConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryPolicyConfiguration")
            .field("context_id", &self.context_id)
            .field("state", &self.state.lock().lifecycle)
            .finish_non_exhaustive()
    }
}

impl PolicyConfiguration for InMemoryPolicyConfiguration {
    fn context_id(&self) -> &ContextId {
        &self.context_id
    }

    fn state(&self) -> LifecycleState {
        self.state.lock().lifecycle
    }

    fn add_to_role(&self, role: &str, permissions: &[Permission]) -> Result<()> {
        if role.is_empty() {
            return Err(Error::invalid_argument("role name must not be empty"));
        }
        let mut state = self.editable("add_to_role")?;
        state
            .role_permissions
            .entry(role.to_string())
            .or_default()
            .extend(permissions.iter().cloned());
        Ok(())
    }

    fn add_to_unchecked_policy(&self, permissions: &[Permission]) -> Result<()> {
        let mut state = self.editable("add_to_unchecked_policy")?;
        state.unchecked.extend(permissions.iter().cloned());
        Ok(())
    }

    fn add_to_excluded_policy(&self, permissions: &[Permission]) -> Result<()> {
        let mut state = self.editable("add_to_excluded_policy")?;
        state.excluded.extend(permissions.iter().cloned());
        Ok(())
    }

    fn remove_role(&self, role: &str) -> Result<()> {
        let mut state = self.editable("remove_role")?;
        // A role literally named "*" takes precedence over the wildcard
        if role == ALL_ROLES && !state.role_permissions.contains_key(ALL_ROLES) {
            state.role_permissions.clear();
        } else {
            state.role_permissions.remove(role);
        }
        Ok(())
    }

    fn remove_unchecked_policy(&self) -> Result<()> {
        self.editable("remove_unchecked_policy")?.unchecked.clear();
        Ok(())
    }

    fn remove_excluded_policy(&self) -> Result<()> {
        self.editable("remove_excluded_policy")?.excluded.clear();
        Ok(())
    }

    fn link_configuration(&self, other: &ContextId) -> Result<()> {
        if &self.context_id == other {
            return Err(Error::invalid_argument(format!(
                "policy context '{other}' cannot be linked to itself"
            )));
        }
        let store = self.store.upgrade().ok_or_else(|| {
            Error::not_found(format!("policy provider owning '{}'", self.context_id))
        })?;
        let target = store
            .context(other)
            .ok_or_else(|| Error::not_found(format!("policy context '{other}'")))?;

        // Both state locks, lower id first
        let (own, peer) = if self.context_id < *other {
            let own = self.state.lock();
            (own, target.state.lock())
        } else {
            let peer = target.state.lock();
            (self.state.lock(), peer)
        };
        if !own.lifecycle.is_open() {
            return Err(Error::invalid_state(
                &self.context_id,
                own.lifecycle,
                "link_configuration",
            ));
        }
        if peer.lifecycle == LifecycleState::Deleted {
            return Err(Error::invalid_state(
                other,
                peer.lifecycle,
                "link_configuration",
            ));
        }

        store.link(&self.context_id, other)?;
        debug!(context_id = %self.context_id, linked = %other, "Linked policy contexts");
        Ok(())
    }

    fn linked_contexts(&self) -> Vec<ContextId> {
        self.store
            .upgrade()
            .map(|store| store.linked(&self.context_id).into_iter().collect())
            .unwrap_or_default()
    }

    fn commit(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.lifecycle == LifecycleState::Deleted {
            return Err(Error::invalid_state(
                &self.context_id,
                state.lifecycle,
                "commit",
            ));
        }
        state.lifecycle = LifecycleState::InService;
        debug!(context_id = %self.context_id, "Policy context committed");
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.clear_statements();
        state.lifecycle = LifecycleState::Deleted;
        if let Some(store) = self.store.upgrade() {
            store.unlink_all(&self.context_id);
        }
        debug!(context_id = %self.context_id, "Policy context deleted");
        Ok(())
    }

    fn snapshot(&self) -> PolicySnapshot {
        let state = self.state.lock();
        let linked = self
            .store
            .upgrade()
            .map(|store| store.linked(&self.context_id))
            .unwrap_or_default();
        PolicySnapshot {
            context_id: self.context_id.clone(),
            state: state.lifecycle,
            role_permissions: state.role_permissions.clone(),
            unchecked: state.unchecked.clone(),
            excluded: state.excluded.clone(),
            linked,
        }
    }
}
