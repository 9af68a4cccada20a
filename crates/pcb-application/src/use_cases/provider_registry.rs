//! Provider Registry - process-wide policy provider singleton
//!
//! Holds the one provider every caller shares. The first `resolve()` runs
//! discovery (configured name → registered factory → instance); later calls
//! read the slot without taking any lock.
//!
//! ## Resolution
//!
//! ```text
//! resolve()
//!    │
//!    ├─ slot.load() is Some ──────────────────────────────▶ return (no lock)
//!    │
//!    └─ lock discovery mutex
//!          ├─ slot.load() is Some (another caller won) ────▶ return
//!          └─ source.provider_name()
//!                ├─ None ─────────────────────────────────▶ ConfigurationMissing
//!                └─ resolve_policy_provider(name)
//!                      ├─ Err ────────────────────────────▶ error, slot untouched
//!                      └─ Ok(handle) ── decorator? ── slot.store ─▶ return
//! ```
//!
//! `replace()` takes the same mutex, so it never interleaves with a
//! discovery in flight. It stores the handle as given; the decorator only
//! applies to handles produced by discovery.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use pcb_domain::error::{ConfigurationFailure, Error, Result};
use pcb_domain::handle::ProviderHandle;
use tracing::{debug, error, info, warn};

use crate::ports::discovery::{EnvProviderSource, ProviderNameSource};
use crate::ports::registry::resolve_policy_provider;

static GLOBAL_REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();

/// Wraps every provider produced by discovery
pub type ProviderDecorator = Box<dyn Fn(ProviderHandle) -> ProviderHandle + Send + Sync>;

/// Singleton slot for the active policy provider
pub struct ProviderRegistry {
    /// Active provider; read lock-free on the fast path
    slot: ArcSwapOption<ProviderHandle>,
    /// Serializes discovery and replacement
    discovery: Mutex<()>,
    /// Where the configured provider name is read from
    source: Box<dyn ProviderNameSource>,
    /// Applied to each discovered provider before it is stored
    decorator: Option<ProviderDecorator>,
}

impl ProviderRegistry {
    /// Create an empty registry reading the provider name from `source`
    pub fn new<S>(source: S) -> Self
    where
        S: ProviderNameSource + 'static,
    {
        Self {
            slot: ArcSwapOption::empty(),
            discovery: Mutex::new(()),
            source: Box::new(source),
            decorator: None,
        }
    }

    /// Wrap every discovered provider with `decorator`
    ///
    /// Runs on each successful discovery, including rediscovery after the
    /// slot was cleared.
    #[must_use]
    pub fn with_decorator<F>(mut self, decorator: F) -> Self
    where
        F: Fn(ProviderHandle) -> ProviderHandle + Send + Sync + 'static,
    {
        self.decorator = Some(Box::new(decorator));
        self
    }

    /// Create a registry that already holds `provider`
    pub fn with_provider<S>(source: S, provider: ProviderHandle) -> Self
    where
        S: ProviderNameSource + 'static,
    {
        let registry = Self::new(source);
        registry.slot.store(Some(Arc::new(provider)));
        registry
    }

    /// The process-wide registry
    ///
    /// Unless [`ProviderRegistry::install_global`] ran first, the global
    /// registry reads the provider name from `PCB_POLICY_PROVIDER`.
    pub fn global() -> &'static ProviderRegistry {
        GLOBAL_REGISTRY.get_or_init(|| ProviderRegistry::new(EnvProviderSource::default()))
    }

    /// Install `registry` as the process-wide registry
    ///
    /// Must happen before the first call to [`ProviderRegistry::global`].
    pub fn install_global(registry: ProviderRegistry) -> Result<&'static ProviderRegistry> {
        GLOBAL_REGISTRY.set(registry).map_err(|_| {
            Error::configuration("global policy provider registry is already initialized")
        })?;
        info!(
            setting = Self::global().source.setting_name(),
            "Installed global policy provider registry"
        );
        Ok(Self::global())
    }

    /// Return the active provider, running discovery on first use
    pub fn resolve(&self) -> Result<ProviderHandle> {
        if let Some(provider) = self.slot.load_full() {
            return Ok(ProviderHandle::clone(&provider));
        }

        let _guard = self.discovery.lock();
        if let Some(provider) = self.slot.load_full() {
            debug!("Policy provider resolved by a concurrent caller");
            return Ok(ProviderHandle::clone(&provider));
        }

        let provider = self.discover().inspect_err(|err| {
            warn!(
                setting = self.source.setting_name(),
                error = %err,
                "Policy provider discovery failed"
            );
        })?;
        self.slot.store(Some(Arc::new(provider.clone())));
        info!(
            provider = provider.provider_name(),
            decorators = provider.decoration_depth(),
            "Policy provider installed"
        );
        Ok(provider)
    }

    /// Overwrite the active provider; `None` clears the slot
    ///
    /// No validation is performed. A cleared slot makes the next `resolve()`
    /// run discovery again.
    pub fn replace(&self, provider: Option<ProviderHandle>) {
        let _guard = self.discovery.lock();
        match &provider {
            Some(handle) => info!(
                provider = handle.provider_name(),
                "Policy provider replaced"
            ),
            None => info!("Policy provider cleared"),
        }
        self.slot.store(provider.map(Arc::new));
    }

    /// Like [`ProviderRegistry::resolve`], but failure is fatal
    ///
    /// Panics with a [`ConfigurationFailure`] payload carrying the original
    /// error, for callers that cannot handle a recoverable discovery failure.
    pub fn resolve_or_panic(&self) -> ProviderHandle {
        match self.resolve() {
            Ok(provider) => provider,
            Err(cause) => {
                let failure = ConfigurationFailure::new(cause);
                error!(error = %failure, "Policy provider resolution is fatal");
                std::panic::panic_any(failure)
            }
        }
    }

    /// Active provider without running discovery
    pub fn current(&self) -> Option<ProviderHandle> {
        self.slot
            .load_full()
            .map(|provider| ProviderHandle::clone(&provider))
    }

    /// Name of the setting discovery reads
    pub fn setting_name(&self) -> &str {
        self.source.setting_name()
    }

    fn discover(&self) -> Result<ProviderHandle> {
        let name = self
            .source
            .provider_name()
            .ok_or_else(|| Error::configuration_missing(self.source.setting_name()))?;
        debug!(provider = %name, "Running policy provider discovery");
        let provider = resolve_policy_provider(&name)?;
        Ok(match &self.decorator {
            Some(decorate) => decorate(provider),
            None => provider,
        })
    }
}

/// Resolve the active provider through the global registry
pub fn policy_provider() -> Result<ProviderHandle> {
    ProviderRegistry::global().resolve()
}

/// Replace the active provider of the global registry
pub fn set_policy_provider(provider: Option<ProviderHandle>) {
    ProviderRegistry::global().replace(provider);
}
