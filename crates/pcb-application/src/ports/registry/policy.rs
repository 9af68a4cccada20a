//! Policy Provider Registry
//!
//! Auto-registration table for policy providers. Each entry maps a provider
//! name to a zero-argument factory, which replaces runtime reflection: a
//! configured name is looked up here and the factory builds the instance.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use pcb_domain::error::{BoxError, Error, Result};
use pcb_domain::handle::ProviderHandle;
use pcb_domain::ports::PolicyConfigurationProvider;
use tracing::debug;

/// Zero-argument provider factory
///
/// Returns a type-erased value so that the registry can check, after
/// construction, that the value really is a [`ProviderHandle`]. Use
/// [`instantiate`] for any provider implementing `Default`.
pub type ProviderFactory = fn() -> std::result::Result<Box<dyn Any + Send + Sync>, BoxError>;

/// Registry entry for policy providers
///
/// Each policy provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(POLICY_PROVIDERS)]`. The entry contains
/// metadata and a factory function to create provider instances.
pub struct PolicyProviderEntry {
    /// Unique provider name (e.g., "memory", "traced-memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: ProviderFactory,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static POLICY_PROVIDERS: [PolicyProviderEntry] = [..];

/// Standard factory: build `P` through its `Default` implementation
pub fn instantiate<P>() -> std::result::Result<Box<dyn Any + Send + Sync>, BoxError>
where
    P: PolicyConfigurationProvider + Default + 'static,
{
    Ok(Box::new(ProviderHandle::new(P::default())))
}

/// Resolve policy provider by name from registry
///
/// Searches the registry for a provider matching `name` and creates a new
/// instance using the provider's factory function. Does not touch any
/// singleton; see `ProviderRegistry` for shared resolution.
///
/// # Returns
/// * `Ok(ProviderHandle)` - Created provider instance
/// * `Err(Error::ProviderTypeNotFound)` - No entry named `name`
/// * `Err(Error::ProviderInstantiationFailed)` - Factory failed or panicked
/// * `Err(Error::ProviderTypeMismatch)` - Factory produced a non-provider value
pub fn resolve_policy_provider(name: &str) -> Result<ProviderHandle> {
    let Some(entry) = POLICY_PROVIDERS.iter().find(|entry| entry.name == name) else {
        let available = POLICY_PROVIDERS
            .iter()
            .map(|entry| entry.name.to_string())
            .collect();
        return Err(Error::ProviderTypeNotFound {
            name: name.to_string(),
            available,
        });
    };

    debug!(provider = name, "Instantiating policy provider");
    let produced = match panic::catch_unwind(AssertUnwindSafe(entry.factory)) {
        Ok(Ok(value)) => value,
        Ok(Err(source)) => return Err(Error::instantiation_failed(name, source)),
        Err(payload) => {
            return Err(Error::instantiation_failed(
                name,
                panic_message(payload.as_ref()).into(),
            ));
        }
    };

    produced
        .downcast::<ProviderHandle>()
        .map(|handle| *handle)
        .map_err(|_| Error::ProviderTypeMismatch {
            name: name.to_string(),
        })
}

/// List all registered policy providers
///
/// Returns a list of (name, description) tuples for all registered
/// policy providers. Useful for diagnostics and error messages.
pub fn list_policy_providers() -> Vec<(&'static str, &'static str)> {
    POLICY_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("factory panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("factory panicked: {message}")
    } else {
        "factory panicked".to_string()
    }
}
