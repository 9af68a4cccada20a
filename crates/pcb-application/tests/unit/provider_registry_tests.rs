//! Tests for the process-wide provider singleton
//!
//! Every test builds its own `ProviderRegistry` over its own discovery entry,
//! so the discovery counters below never see calls from other tests.

extern crate pcb_providers;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

use linkme::distributed_slice;
use parking_lot::Mutex;
use pcb_application::ports::discovery::{ProviderNameSource, StaticProviderSource};
use pcb_application::ports::registry::{POLICY_PROVIDERS, PolicyProviderEntry, instantiate};
use pcb_application::use_cases::{ProviderRegistry, policy_provider, set_policy_provider};
use pcb_domain::{BoxError, ConfigurationFailure, ContextId, Error, ProviderHandle};
use pcb_providers::{InMemoryPolicyProvider, TracingPolicyProvider};

type FactoryResult = Result<Box<dyn Any + Send + Sync>, BoxError>;

static CONCURRENT_DISCOVERIES: AtomicUsize = AtomicUsize::new(0);
static REPLACE_DISCOVERIES: AtomicUsize = AtomicUsize::new(0);
static SCENARIO_DISCOVERIES: AtomicUsize = AtomicUsize::new(0);

fn concurrent_factory() -> FactoryResult {
    CONCURRENT_DISCOVERIES.fetch_add(1, Ordering::SeqCst);
    // Keep the slow path busy so the other callers pile up on the mutex
    std::thread::sleep(Duration::from_millis(25));
    instantiate::<InMemoryPolicyProvider>()
}

fn replace_factory() -> FactoryResult {
    REPLACE_DISCOVERIES.fetch_add(1, Ordering::SeqCst);
    instantiate::<InMemoryPolicyProvider>()
}

fn scenario_factory() -> FactoryResult {
    SCENARIO_DISCOVERIES.fetch_add(1, Ordering::SeqCst);
    instantiate::<InMemoryPolicyProvider>()
}

fn not_a_provider() -> FactoryResult {
    Ok(Box::new(42_u32))
}

#[distributed_slice(POLICY_PROVIDERS)]
static CONCURRENT_ENTRY: PolicyProviderEntry = PolicyProviderEntry {
    name: "test-concurrent",
    description: "Counts discoveries under concurrent first use",
    factory: concurrent_factory,
};

#[distributed_slice(POLICY_PROVIDERS)]
static REPLACE_ENTRY: PolicyProviderEntry = PolicyProviderEntry {
    name: "test-replace",
    description: "Counts discoveries around replace",
    factory: replace_factory,
};

#[distributed_slice(POLICY_PROVIDERS)]
static SCENARIO_ENTRY: PolicyProviderEntry = PolicyProviderEntry {
    name: "test-scenario",
    description: "Counts discoveries across reconfiguration",
    factory: scenario_factory,
};

#[distributed_slice(POLICY_PROVIDERS)]
static SCENARIO_MISMATCH_ENTRY: PolicyProviderEntry = PolicyProviderEntry {
    name: "test-scenario-mismatch",
    description: "Builds an integer instead of a provider",
    factory: not_a_provider,
};

/// Name source the test can reconfigure between calls
#[derive(Clone, Default)]
struct SwitchableSource {
    name: Arc<Mutex<Option<String>>>,
}

impl SwitchableSource {
    fn set(&self, name: Option<&str>) {
        *self.name.lock() = name.map(str::to_string);
    }
}

impl ProviderNameSource for SwitchableSource {
    fn setting_name(&self) -> &str {
        "test.policy.provider"
    }

    fn provider_name(&self) -> Option<String> {
        self.name.lock().clone()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_resolve_runs_discovery_once() {
    const CALLERS: usize = 8;

    let registry = Arc::new(ProviderRegistry::new(StaticProviderSource::new(Some(
        "test-concurrent",
    ))));
    let barrier = Arc::new(Barrier::new(CALLERS));

    let tasks: Vec<_> = (0..CALLERS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            tokio::task::spawn_blocking(move || {
                barrier.wait();
                registry.resolve()
            })
        })
        .collect();

    let mut providers = Vec::with_capacity(CALLERS);
    for task in tasks {
        let provider = task
            .await
            .expect("resolve task panicked")
            .expect("resolve failed");
        providers.push(provider);
    }

    assert!(providers.windows(2).all(|pair| pair[0].ptr_eq(&pair[1])));
    assert_eq!(CONCURRENT_DISCOVERIES.load(Ordering::SeqCst), 1);
}

#[test]
fn test_replace_skips_discovery() {
    let registry = ProviderRegistry::new(StaticProviderSource::new(Some("test-replace")));
    let injected = ProviderHandle::new(InMemoryPolicyProvider::new());

    registry.replace(Some(injected.clone()));
    let resolved = registry.resolve().unwrap();

    assert!(resolved.ptr_eq(&injected));
    assert_eq!(REPLACE_DISCOVERIES.load(Ordering::SeqCst), 0);

    // Clearing the slot brings discovery back
    registry.replace(None);
    assert!(registry.current().is_none());
    let rediscovered = registry.resolve().unwrap();
    assert!(!rediscovered.ptr_eq(&injected));
    assert_eq!(REPLACE_DISCOVERIES.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reconfiguration_scenario() {
    let source = SwitchableSource::default();
    let registry = ProviderRegistry::new(source.clone());

    // Unset
    match registry.resolve() {
        Err(Error::ConfigurationMissing { setting }) => assert_eq!(setting, "test.policy.provider"),
        other => panic!("Expected ConfigurationMissing, got {other:?}"),
    }

    // Wrong capability set
    source.set(Some("test-scenario-mismatch"));
    assert!(matches!(
        registry.resolve(),
        Err(Error::ProviderTypeMismatch { .. })
    ));
    assert!(registry.current().is_none());

    // Valid
    source.set(Some("test-scenario"));
    let first = registry.resolve().unwrap();
    let second = registry.resolve().unwrap();
    assert!(first.ptr_eq(&second));
    assert_eq!(SCENARIO_DISCOVERIES.load(Ordering::SeqCst), 1);

    // Once resolved, the source is not consulted again
    source.set(None);
    assert!(registry.resolve().unwrap().ptr_eq(&first));

    // Cleared: discovery runs again with whatever is configured now
    source.set(Some("test-scenario"));
    registry.replace(None);
    let third = registry.resolve().unwrap();
    assert!(!third.ptr_eq(&first));
    assert_eq!(SCENARIO_DISCOVERIES.load(Ordering::SeqCst), 2);
}

#[test]
fn test_resolve_or_panic_carries_cause() {
    let registry = ProviderRegistry::new(StaticProviderSource::new(None::<String>));

    let payload = panic::catch_unwind(AssertUnwindSafe(|| registry.resolve_or_panic()))
        .expect_err("resolution should be fatal");
    let failure = payload
        .downcast::<ConfigurationFailure>()
        .expect("payload should be a ConfigurationFailure");
    assert!(matches!(
        failure.cause,
        Error::ConfigurationMissing { .. }
    ));
}

#[test]
fn test_resolve_or_panic_returns_installed_provider() {
    let provider = ProviderHandle::new(InMemoryPolicyProvider::new());
    let registry = ProviderRegistry::with_provider(
        StaticProviderSource::new(None::<String>),
        provider.clone(),
    );
    assert!(registry.resolve_or_panic().ptr_eq(&provider));
}

#[test]
fn test_registry_keeps_decorated_handle() {
    let inner = ProviderHandle::new(InMemoryPolicyProvider::new());
    let decorated = ProviderHandle::new(TracingPolicyProvider::new(inner.clone()));
    let registry = ProviderRegistry::new(StaticProviderSource::new(None::<String>));

    registry.replace(Some(decorated.clone()));
    let resolved = registry.resolve().unwrap();

    assert!(resolved.ptr_eq(&decorated));
    assert!(resolved.wrapped().unwrap().ptr_eq(&inner));
}

#[test]
fn test_resolved_provider_serves_lifecycle() {
    let registry = ProviderRegistry::new(StaticProviderSource::new(Some("memory")));
    let provider = registry.resolve().unwrap();
    let id = ContextId::new("shop").unwrap();

    let configuration = provider.get_or_create(&id, false).unwrap();
    let again = registry.resolve().unwrap().get_if_present(&id).unwrap().unwrap();
    assert!(Arc::ptr_eq(&configuration, &again));
}

#[test]
fn test_global_replace_then_resolve() {
    let provider = ProviderHandle::new(InMemoryPolicyProvider::new());
    set_policy_provider(Some(provider.clone()));
    assert!(policy_provider().unwrap().ptr_eq(&provider));
    assert!(ProviderRegistry::global().current().is_some());

    let second = ProviderRegistry::install_global(ProviderRegistry::new(
        StaticProviderSource::new(None::<String>),
    ));
    assert!(matches!(second, Err(Error::Configuration { .. })));
}

#[test]
fn test_decorator_survives_rediscovery() {
    let registry = ProviderRegistry::new(StaticProviderSource::new(Some("memory")))
        .with_decorator(|inner| ProviderHandle::new(TracingPolicyProvider::new(inner)));

    let first = registry.resolve().unwrap();
    assert_eq!(first.decoration_depth(), 1);
    assert_eq!(first.innermost().provider_name(), "memory");

    registry.replace(None);
    let second = registry.resolve().unwrap();
    assert_eq!(second.decoration_depth(), 1);
    assert_eq!(second.provider_name(), "tracing");
    assert!(!second.ptr_eq(&first));

    // Injected handles are stored as given
    let plain = ProviderHandle::new(InMemoryPolicyProvider::new());
    registry.replace(Some(plain.clone()));
    let injected = registry.resolve().unwrap();
    assert!(injected.ptr_eq(&plain));
    assert_eq!(injected.decoration_depth(), 0);
}
