//! Error types for tagging domain validation and resolution.

use super::ServiceName;
use thiserror::Error;

/// Errors returned while resolving service descriptors into clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaggingDomainError {
    /// The service name is empty after trimming.
    #[error("service name must not be empty")]
    EmptyServiceName,

    /// The service name contains characters outside `[a-z0-9_]`.
    #[error(
        "service name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidServiceName(String),

    /// The resolved service name has no entry in the service registry.
    #[error("unknown tagging service: {0}")]
    UnknownService(ServiceName),

    /// A configured descriptor must map exactly one service name to settings.
    #[error("descriptor must contain exactly one service entry, found {0}")]
    AmbiguousDescriptor(usize),

    /// Credential or API-key extraction was invoked on a descriptor whose
    /// shape does not match the requested settings form.
    #[error("invalid credentials for service '{service}': {violation}")]
    InvalidCredentials {
        /// Name the descriptor resolves to, as written in the configuration.
        service: String,
        /// The specific shape violation.
        violation: CredentialsViolation,
    },
}

/// Shape violations encountered while extracting settings from a descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsViolation {
    /// The descriptor is a bare service name and carries no settings value.
    #[error("descriptor is a bare service name and carries no settings")]
    BareName,

    /// The settings value is an API-key string where a credentials mapping
    /// was requested.
    #[error("settings value is a string, expected a username to password mapping")]
    ExpectedPairMapping,

    /// The settings value is a credentials mapping where an API-key string
    /// was requested.
    #[error("settings value is a mapping, expected an API-key string")]
    ExpectedApiKey,

    /// The credentials mapping must hold exactly one username to password
    /// pair.
    #[error("credentials mapping must hold exactly one pair, found {0}")]
    NotSinglePair(usize),

    /// The username or password is empty after trimming.
    #[error("credential username and password must not be empty")]
    EmptyField,

    /// The API key is empty after trimming.
    #[error("API key must not be empty")]
    EmptyApiKey,
}

/// Error returned while constructing a tag from an empty label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("tag label must not be empty")]
pub struct EmptyTagError;
