//! Point-in-time view of a policy context

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{ContextId, LifecycleState, Permission};

/// Copy of a context's statements, linkages and state
///
/// Taken under the configuration's lock, so the fields are mutually
/// consistent even while other threads keep editing the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    /// Context the snapshot was taken from
    pub context_id: ContextId,
    /// State at the time of the snapshot
    pub state: LifecycleState,
    /// Permissions granted per role
    pub role_permissions: BTreeMap<String, BTreeSet<Permission>>,
    /// Permissions granted to everyone
    pub unchecked: BTreeSet<Permission>,
    /// Permissions denied to everyone
    pub excluded: BTreeSet<Permission>,
    /// Contexts linked to this one
    pub linked: BTreeSet<ContextId>,
}

impl PolicySnapshot {
    /// Whether the context holds no statements at all
    pub fn has_no_statements(&self) -> bool {
        self.role_permissions.is_empty() && self.unchecked.is_empty() && self.excluded.is_empty()
    }
}
