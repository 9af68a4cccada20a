//! Policy context identity and lifecycle state

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a policy context
///
/// Opaque to this layer. The only rule is that it is not empty; uniqueness is
/// scoped to the provider instance that hands out configurations for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContextId(String);

impl ContextId {
    /// Create a context identifier, rejecting the empty string
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::invalid_argument("context id must not be empty"));
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContextId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContextId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContextId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContextId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContextId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ContextId> for String {
    fn from(id: ContextId) -> Self {
        id.0
    }
}

/// Lifecycle state of an existing policy context
///
/// A context that was never created has no state at all; providers model
/// that as the absence of an entry rather than a fourth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleState {
    /// Statements may be added, removed and linked
    Open,
    /// Committed and in effect; read-only until reopened
    InService,
    /// Retired; statements and linkages have been dropped
    Deleted,
}

impl LifecycleState {
    /// Whether the context is committed and in effect
    pub fn is_in_service(self) -> bool {
        self == Self::InService
    }

    /// Whether statements may be edited
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Stable lowercase-camel name of the state
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InService => "inService",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
