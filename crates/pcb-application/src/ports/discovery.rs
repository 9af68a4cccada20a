//! Provider name sources
//!
//! The registry reads the configured provider name lazily, at the moment it
//! first needs to run discovery, so the source is consulted again after a
//! failed attempt or after the slot is cleared.

use pcb_domain::constants::POLICY_PROVIDER_ENV;

/// Where the name of the provider to instantiate comes from
pub trait ProviderNameSource: Send + Sync {
    /// Name of the setting, used in `ConfigurationMissing` errors
    fn setting_name(&self) -> &str;

    /// Configured provider name, or `None` when unset
    fn provider_name(&self) -> Option<String>;
}

/// Reads the provider name from an environment variable
#[derive(Debug, Clone)]
pub struct EnvProviderSource {
    variable: String,
}

impl EnvProviderSource {
    /// Read from `variable` instead of the default
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvProviderSource {
    fn default() -> Self {
        Self::new(POLICY_PROVIDER_ENV)
    }
}

impl ProviderNameSource for EnvProviderSource {
    fn setting_name(&self) -> &str {
        &self.variable
    }

    fn provider_name(&self) -> Option<String> {
        std::env::var(&self.variable)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// Fixed provider name decided by the host at startup
#[derive(Debug, Clone, Default)]
pub struct StaticProviderSource {
    setting: String,
    provider: Option<String>,
}

impl StaticProviderSource {
    /// Source that always answers `provider`
    pub fn new(provider: Option<impl Into<String>>) -> Self {
        Self {
            setting: "static provider source".to_string(),
            provider: provider.map(Into::into),
        }
    }

    /// Override the setting name reported in errors
    pub fn with_setting_name(mut self, setting: impl Into<String>) -> Self {
        self.setting = setting.into();
        self
    }
}

impl ProviderNameSource for StaticProviderSource {
    fn setting_name(&self) -> &str {
        &self.setting
    }

    fn provider_name(&self) -> Option<String> {
        self.provider.clone()
    }
}
