//! Provider constants

/// Registry name of the in-memory provider
pub const IN_MEMORY_PROVIDER_NAME: &str = "memory";

/// Registry name of the traced in-memory provider
pub const TRACED_MEMORY_PROVIDER_NAME: &str = "traced-memory";

/// Name reported by the tracing decorator itself
pub const TRACING_DECORATOR_NAME: &str = "tracing";
