//! Tests for the policy provider discovery table
//!
//! Uses `extern crate pcb_providers` to force linkme registration of real providers,
//! and registers a few misbehaving entries of its own.

// Force linkme registration of all providers from pcb-providers
extern crate pcb_providers;

use std::any::Any;

use linkme::distributed_slice;
use pcb_application::ports::registry::{
    POLICY_PROVIDERS, PolicyProviderEntry, list_policy_providers, resolve_policy_provider,
};
use pcb_domain::{BoxError, ContextId, Error};

fn mismatched_factory() -> Result<Box<dyn Any + Send + Sync>, BoxError> {
    Ok(Box::new(String::from("not a policy provider")))
}

fn failing_factory() -> Result<Box<dyn Any + Send + Sync>, BoxError> {
    Err("backing store unavailable".into())
}

fn panicking_factory() -> Result<Box<dyn Any + Send + Sync>, BoxError> {
    panic!("constructor exploded")
}

#[distributed_slice(POLICY_PROVIDERS)]
static MISMATCHED_ENTRY: PolicyProviderEntry = PolicyProviderEntry {
    name: "test-table-mismatch",
    description: "Produces a value that is not a policy provider",
    factory: mismatched_factory,
};

#[distributed_slice(POLICY_PROVIDERS)]
static FAILING_ENTRY: PolicyProviderEntry = PolicyProviderEntry {
    name: "test-table-failing",
    description: "Factory returns an error",
    factory: failing_factory,
};

#[distributed_slice(POLICY_PROVIDERS)]
static PANICKING_ENTRY: PolicyProviderEntry = PolicyProviderEntry {
    name: "test-table-panicking",
    description: "Factory panics",
    factory: panicking_factory,
};

#[test]
fn test_list_providers_includes_builtin_providers() {
    let providers = list_policy_providers();

    let names: Vec<&str> = providers.iter().map(|(name, _)| *name).collect();
    assert!(
        names.contains(&"memory"),
        "In-memory provider should be registered. Available: {names:?}"
    );
    assert!(
        names.contains(&"traced-memory"),
        "Tracing decorator should be registered. Available: {names:?}"
    );
    assert!(providers.iter().all(|(_, description)| !description.is_empty()));
}

#[test]
fn test_resolve_memory_provider() {
    let provider = resolve_policy_provider("memory").expect("memory provider should resolve");
    assert_eq!(provider.provider_name(), "memory");
    assert!(provider.wrapped().is_none());

    let id = ContextId::new("registry-smoke").unwrap();
    let configuration = provider.get_or_create(&id, false).unwrap();
    assert_eq!(configuration.context_id(), &id);
}

#[test]
fn test_each_resolution_builds_a_new_instance() {
    let first = resolve_policy_provider("memory").unwrap();
    let second = resolve_policy_provider("memory").unwrap();
    assert!(!first.ptr_eq(&second));
}

#[test]
fn test_resolve_traced_provider_is_decorated() {
    let provider = resolve_policy_provider("traced-memory").unwrap();
    assert_eq!(provider.decoration_depth(), 1);
    assert_eq!(provider.innermost().provider_name(), "memory");
}

#[test]
fn test_unknown_provider_not_found() {
    match resolve_policy_provider("ldap") {
        Err(Error::ProviderTypeNotFound { name, available }) => {
            assert_eq!(name, "ldap");
            assert!(available.iter().any(|n| n == "memory"));
        }
        other => panic!("Expected ProviderTypeNotFound, got {other:?}"),
    }
}

#[test]
fn test_mismatched_value_rejected() {
    match resolve_policy_provider("test-table-mismatch") {
        Err(Error::ProviderTypeMismatch { name }) => assert_eq!(name, "test-table-mismatch"),
        other => panic!("Expected ProviderTypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_factory_error_wrapped() {
    match resolve_policy_provider("test-table-failing") {
        Err(err @ Error::ProviderInstantiationFailed { .. }) => {
            let source = std::error::Error::source(&err).expect("cause should be kept");
            assert_eq!(source.to_string(), "backing store unavailable");
        }
        other => panic!("Expected ProviderInstantiationFailed, got {other:?}"),
    }
}

#[test]
fn test_factory_panic_wrapped() {
    match resolve_policy_provider("test-table-panicking") {
        Err(Error::ProviderInstantiationFailed { name, source }) => {
            assert_eq!(name, "test-table-panicking");
            assert!(source.to_string().contains("constructor exploded"));
        }
        other => panic!("Expected ProviderInstantiationFailed, got {other:?}"),
    }
}
