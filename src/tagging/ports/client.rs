//! Client port for third-party tagging services.

use crate::tagging::domain::{ApiKey, Credentials, ServiceName, Tag};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tagging-client operations.
pub type TaggingClientResult<T> = Result<T, TaggingClientError>;

/// Contract for one vendor tagging-service client.
///
/// Clients are constructed without arguments by their registry factory and
/// optionally configured once, immediately after construction, through the
/// capability accessors below. A client that does not expose a capability
/// keeps the default `None` accessor and is never offered that settings
/// form.
#[async_trait]
pub trait TaggingClient: Send + Sync {
    /// Canonical name of the service behind this client.
    fn service_name(&self) -> &ServiceName;

    /// Extracts tags for the given content.
    async fn get_tags(&self, content: &str) -> TaggingClientResult<Vec<Tag>>;

    /// API-key configuration capability of this instance, when supported.
    fn api_key_capability(&mut self) -> Option<&mut dyn AcceptsApiKey> {
        None
    }

    /// Credentials configuration capability of this instance, when
    /// supported.
    fn credentials_capability(&mut self) -> Option<&mut dyn AcceptsCredentials> {
        None
    }
}

/// Capability of a client that authenticates with a vendor API key.
pub trait AcceptsApiKey {
    /// Applies the API key extracted from the service descriptor.
    fn set_api_key(&mut self, key: ApiKey);
}

/// Capability of a client that authenticates with a username and password.
pub trait AcceptsCredentials {
    /// Applies the credentials pair extracted from the service descriptor,
    /// verbatim.
    fn set_credentials(&mut self, credentials: Credentials);
}

/// Errors returned by tagging-client implementations.
#[derive(Debug, Clone, Error)]
pub enum TaggingClientError {
    /// The client is missing authentication settings its service requires.
    #[error("tagging service '{service}' is not configured: {reason}")]
    NotConfigured {
        /// Canonical service name.
        service: ServiceName,
        /// Missing configuration description.
        reason: String,
    },

    /// The request to the vendor endpoint failed.
    #[error("tagging service '{service}' request failed: {cause}")]
    Transport {
        /// Canonical service name.
        service: ServiceName,
        /// Underlying transport failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The vendor response could not be interpreted as tags.
    #[error("tagging service '{service}' returned an unexpected response: {detail}")]
    UnexpectedResponse {
        /// Canonical service name.
        service: ServiceName,
        /// Diagnostic detail.
        detail: String,
    },
}

impl TaggingClientError {
    /// Builds a missing-configuration error.
    #[must_use]
    pub fn not_configured(service: ServiceName, reason: impl Into<String>) -> Self {
        Self::NotConfigured {
            service,
            reason: reason.into(),
        }
    }

    /// Wraps a transport failure from the vendor exchange.
    #[must_use]
    pub fn transport(
        service: ServiceName,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            service,
            cause: Arc::new(err),
        }
    }

    /// Builds an unexpected-response error with a diagnostic detail.
    #[must_use]
    pub fn unexpected_response(service: ServiceName, detail: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            service,
            detail: detail.into(),
        }
    }
}
