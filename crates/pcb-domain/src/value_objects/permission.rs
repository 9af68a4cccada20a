//! Opaque permission statements

use std::fmt;

use serde::{Deserialize, Serialize};

/// A permission as stored in a policy context
///
/// This layer never evaluates permissions. `kind` names the permission
/// family, `name` its target and `actions` the optional action list, all
/// interpreted only by the decision engine sitting behind the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission {
    /// Permission family (e.g. "web-resource", "ejb-method")
    pub kind: String,
    /// Target of the permission
    pub name: String,
    /// Optional action list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<String>,
}

impl Permission {
    /// Create a permission without actions
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            actions: None,
        }
    }

    /// Set the action list
    pub fn with_actions(mut self, actions: impl Into<String>) -> Self {
        self.actions = Some(actions.into());
        self
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actions {
            Some(actions) => write!(f, "{}({}, {})", self.kind, self.name, actions),
            None => write!(f, "{}({})", self.kind, self.name),
        }
    }
}
