//! Resolution of service descriptors into configured clients.

use super::ServiceRegistry;
use crate::tagging::domain::{ServiceDescriptor, ServiceSettings, TaggingDomainError};
use crate::tagging::ports::TaggingClient;

/// Turns one service descriptor into a configured client instance.
///
/// Resolution looks the canonical name up in the registry, constructs a
/// fresh instance through the registered factory, and injects the API key
/// or credentials pair only when the constructed instance exposes the
/// matching capability and the descriptor carries the matching settings
/// form. Settings without a matching capability are skipped without error.
#[derive(Debug)]
pub struct ServiceResolver {
    registry: ServiceRegistry,
}

impl ServiceResolver {
    /// Creates a resolver over the given registry.
    #[must_use]
    pub const fn new(registry: ServiceRegistry) -> Self {
        Self { registry }
    }

    /// Returns the backing registry.
    #[must_use]
    pub const fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Resolves a descriptor into a configured client.
    ///
    /// # Errors
    ///
    /// Returns [`TaggingDomainError::UnknownService`] when the resolved name
    /// has no registry entry, [`TaggingDomainError::InvalidCredentials`]
    /// when settings extraction fails on a capable instance, and descriptor
    /// shape errors from [`ServiceDescriptor::service_name`].
    pub fn resolve(
        &self,
        descriptor: &ServiceDescriptor,
    ) -> Result<Box<dyn TaggingClient>, TaggingDomainError> {
        let name = descriptor.service_name()?;
        let factory = self.registry.resolve(&name)?;
        let mut client = factory();

        match descriptor.settings() {
            Some(ServiceSettings::ApiKey(_)) => {
                if let Some(capability) = client.api_key_capability() {
                    capability.set_api_key(descriptor.api_key()?);
                }
            }
            Some(ServiceSettings::Credentials(_)) => {
                if let Some(capability) = client.credentials_capability() {
                    capability.set_credentials(descriptor.credentials()?);
                }
            }
            None => {}
        }

        Ok(client)
    }
}
