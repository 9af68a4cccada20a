//! Error handling types

use thiserror::Error;

use crate::value_objects::{ContextId, LifecycleState};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the cause of wrapped failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the policy provider subsystem
#[derive(Error, Debug)]
pub enum Error {
    /// No provider name is configured
    #[error("Policy provider not configured: '{setting}' is not set")]
    ConfigurationMissing {
        /// Name of the setting that was consulted
        setting: String,
    },

    /// The configured provider name has no registered factory
    #[error("Unknown policy provider '{name}'. Available providers: {available:?}")]
    ProviderTypeNotFound {
        /// Configured provider name
        name: String,
        /// Names registered at the time of the lookup
        available: Vec<String>,
    },

    /// The provider factory failed while building the instance
    #[error("Policy provider '{name}' cannot be instantiated: {source}")]
    ProviderInstantiationFailed {
        /// Configured provider name
        name: String,
        /// Failure raised by the factory
        #[source]
        source: BoxError,
    },

    /// The factory produced something that is not a policy provider
    #[error("Policy provider '{name}' does not implement the policy provider capabilities")]
    ProviderTypeMismatch {
        /// Configured provider name
        name: String,
    },

    /// A provider failed internally while answering a lifecycle query
    #[error("Policy provider query failed for context '{context_id}': {message}")]
    ProviderQueryFailed {
        /// Context the query was about
        context_id: ContextId,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A configuration handle operation is not allowed in the current state
    #[error("Policy context '{context_id}' is {state}; cannot {operation}")]
    InvalidState {
        /// Context the operation targeted
        context_id: ContextId,
        /// State the context was in
        state: LifecycleState,
        /// Rejected operation
        operation: &'static str,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration loading or subsystem setup error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state(
        context_id: &ContextId,
        state: LifecycleState,
        operation: &'static str,
    ) -> Self {
        Self::InvalidState {
            context_id: context_id.clone(),
            state,
            operation,
        }
    }
}

// Discovery error creation methods
impl Error {
    /// Create a missing configuration error
    pub fn configuration_missing<S: Into<String>>(setting: S) -> Self {
        Self::ConfigurationMissing {
            setting: setting.into(),
        }
    }

    /// Create an instantiation failure wrapping the factory's cause
    pub fn instantiation_failed<S: Into<String>>(name: S, source: BoxError) -> Self {
        Self::ProviderInstantiationFailed {
            name: name.into(),
            source,
        }
    }

    /// Create a provider query failure
    pub fn query_failed<S: Into<String>>(context_id: &ContextId, message: S) -> Self {
        Self::ProviderQueryFailed {
            context_id: context_id.clone(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider query failure with source
    pub fn query_failed_with_source<S, E>(context_id: &ContextId, message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ProviderQueryFailed {
            context_id: context_id.clone(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the caller can fix the cause and try again
    ///
    /// Discovery failures never touch the registry slot, so a corrected
    /// configuration followed by another `resolve()` may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing { .. }
                | Self::ProviderTypeNotFound { .. }
                | Self::ProviderInstantiationFailed { .. }
                | Self::ProviderTypeMismatch { .. }
                | Self::ProviderQueryFailed { .. }
        )
    }
}

/// Fatal wrapper raised by accessors that cannot report recoverable failures
///
/// Carried as the panic payload of `ProviderRegistry::resolve_or_panic`, so a
/// supervisor catching the unwind can still inspect the original cause.
#[derive(Error, Debug)]
#[error("Policy provider configuration failure: {cause}")]
pub struct ConfigurationFailure {
    /// The resolution error that triggered the failure
    #[source]
    pub cause: Error,
}

impl ConfigurationFailure {
    /// Wrap a resolution error
    pub fn new(cause: Error) -> Self {
        Self { cause }
    }

    /// Unwrap the original cause
    pub fn into_cause(self) -> Error {
        self.cause
    }
}

impl From<Error> for ConfigurationFailure {
    fn from(cause: Error) -> Self {
        Self::new(cause)
    }
}
