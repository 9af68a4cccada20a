//! Policy provider settings

use pcb_application::ports::discovery::ProviderNameSource;
use pcb_domain::constants::POLICY_PROVIDER_KEY;
use serde::{Deserialize, Serialize};

/// Which policy provider the process uses
///
/// Also serves as the registry's name source, so a registry built from
/// configuration reports `policy.provider` when the name is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PolicySettings {
    /// Registered provider name, e.g. `memory`
    pub provider: Option<String>,

    /// Wrap the resolved provider in the tracing decorator
    pub trace_calls: bool,
}

impl PolicySettings {
    /// Settings naming `provider`
    pub fn with_provider(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            trace_calls: false,
        }
    }
}

impl ProviderNameSource for PolicySettings {
    fn setting_name(&self) -> &str {
        POLICY_PROVIDER_KEY
    }

    fn provider_name(&self) -> Option<String> {
        self.provider
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}
