//! Provider registry bootstrap
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//! let registry = install_from_config(&config)?;
//! let provider = registry.resolve()?;
//! ```

use pcb_application::use_cases::ProviderRegistry;
use pcb_domain::error::Result;
use pcb_domain::handle::ProviderHandle;
use pcb_providers::TracingPolicyProvider;
use tracing::info;

use crate::config::AppConfig;

/// Build a registry that discovers the provider named in `config`
///
/// With `policy.trace_calls` set, every discovered provider is wrapped in the
/// tracing decorator, and discovery runs once here so a bad provider name
/// fails at startup. Otherwise discovery stays lazy.
pub fn build_registry(config: &AppConfig) -> Result<ProviderRegistry> {
    let registry = ProviderRegistry::new(config.policy.clone());
    if !config.policy.trace_calls {
        return Ok(registry);
    }

    let registry = registry.with_decorator(|inner| {
        info!(
            provider = inner.provider_name(),
            "Decorating policy provider with call tracing"
        );
        ProviderHandle::new(TracingPolicyProvider::new(inner))
    });
    registry.resolve()?;
    Ok(registry)
}

/// Build a registry from `config` and install it as the process-wide one
///
/// Fails if the global registry was already initialized, including by an
/// earlier call to `policy_provider()`.
pub fn install_from_config(config: &AppConfig) -> Result<&'static ProviderRegistry> {
    ProviderRegistry::install_global(build_registry(config)?)
}
