//! Unit tests for provider handles and decoration chains

use std::sync::Arc;

use pcb_domain::{
    ContextId, Error, PolicyConfiguration, PolicyConfigurationProvider, ProviderHandle, Result,
};

struct LeafProvider;

impl PolicyConfigurationProvider for LeafProvider {
    fn provider_name(&self) -> &str {
        "leaf"
    }

    fn get_or_create(
        &self,
        context_id: &ContextId,
        _remove: bool,
    ) -> Result<Arc<dyn PolicyConfiguration>> {
        Err(Error::not_found(context_id.to_string()))
    }

    fn get_if_present(
        &self,
        _context_id: &ContextId,
    ) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        Ok(None)
    }

    fn get_for_ambient_context(&self) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        Ok(None)
    }

    fn is_in_service(&self, _context_id: &ContextId) -> Result<bool> {
        Ok(false)
    }
}

struct WrappingProvider {
    name: &'static str,
    inner: ProviderHandle,
}

impl PolicyConfigurationProvider for WrappingProvider {
    fn provider_name(&self) -> &str {
        self.name
    }

    fn get_or_create(
        &self,
        context_id: &ContextId,
        remove: bool,
    ) -> Result<Arc<dyn PolicyConfiguration>> {
        self.inner.get_or_create(context_id, remove)
    }

    fn get_if_present(
        &self,
        context_id: &ContextId,
    ) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        self.inner.get_if_present(context_id)
    }

    fn get_for_ambient_context(&self) -> Result<Option<Arc<dyn PolicyConfiguration>>> {
        self.inner.get_for_ambient_context()
    }

    fn is_in_service(&self, context_id: &ContextId) -> Result<bool> {
        self.inner.is_in_service(context_id)
    }

    fn wrapped(&self) -> Option<&ProviderHandle> {
        Some(&self.inner)
    }
}

#[test]
fn test_clone_is_same_instance() {
    let handle = ProviderHandle::new(LeafProvider);
    let clone = handle.clone();
    assert!(handle.ptr_eq(&clone));

    let other = ProviderHandle::new(LeafProvider);
    assert!(!handle.ptr_eq(&other));
}

#[test]
fn test_undecorated_chain_has_one_element() {
    let handle = ProviderHandle::new(LeafProvider);
    assert!(handle.wrapped().is_none());
    assert_eq!(handle.decoration_chain().count(), 1);
    assert_eq!(handle.decoration_depth(), 0);
    assert!(handle.innermost().ptr_eq(&handle));
}

#[test]
fn test_decoration_chain_order() {
    let leaf = ProviderHandle::new(LeafProvider);
    let audit = ProviderHandle::new(WrappingProvider {
        name: "audit",
        inner: leaf.clone(),
    });
    let tracing = ProviderHandle::new(WrappingProvider {
        name: "tracing",
        inner: audit.clone(),
    });

    let names: Vec<&str> = tracing
        .decoration_chain()
        .map(|handle| handle.provider_name())
        .collect();
    assert_eq!(names, vec!["tracing", "audit", "leaf"]);
    assert_eq!(tracing.decoration_depth(), 2);
    assert!(tracing.innermost().ptr_eq(&leaf));
    assert!(tracing.wrapped().unwrap().ptr_eq(&audit));
}

#[test]
fn test_decorator_delegates() {
    let handle = ProviderHandle::new(WrappingProvider {
        name: "outer",
        inner: ProviderHandle::new(LeafProvider),
    });
    let id = ContextId::new("missing").unwrap();
    assert!(matches!(
        handle.get_or_create(&id, false),
        Err(Error::NotFound { .. })
    ));
    assert!(!handle.is_in_service(&id).unwrap());
}

#[test]
fn test_debug_lists_chain() {
    let handle = ProviderHandle::new(WrappingProvider {
        name: "outer",
        inner: ProviderHandle::new(LeafProvider),
    });
    let debug = format!("{handle:?}");
    assert!(debug.contains("outer"));
    assert!(debug.contains("leaf"));
}
