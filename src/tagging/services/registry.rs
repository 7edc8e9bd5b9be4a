//! Canonical-name to client-factory registry.

use crate::tagging::adapters::{AlchemyClient, DeliciousClient, OpenCalaisClient, YahooClient};
use crate::tagging::domain::{ServiceName, TaggingDomainError};
use crate::tagging::ports::TaggingClient;
use std::collections::BTreeMap;
use std::fmt;

/// Constructor for a tagging client.
///
/// Factories take no arguments; authentication settings are applied after
/// construction through the client's capability accessors.
pub type ClientFactory = Box<dyn Fn() -> Box<dyn TaggingClient> + Send + Sync>;

/// Lookup table from canonical service names to client factories.
pub struct ServiceRegistry {
    factories: BTreeMap<ServiceName, ClientFactory>,
}

impl ServiceRegistry {
    /// Creates a registry with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the built-in vendor clients: `yahoo`,
    /// `alchemy`, `open_calais`, and `delicious`.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(
            ServiceName::from_canonical("yahoo"),
            Box::new(|| Box::new(YahooClient::new())),
        );
        registry.register(
            ServiceName::from_canonical("alchemy"),
            Box::new(|| Box::new(AlchemyClient::new())),
        );
        registry.register(
            ServiceName::from_canonical("open_calais"),
            Box::new(|| Box::new(OpenCalaisClient::new())),
        );
        registry.register(
            ServiceName::from_canonical("delicious"),
            Box::new(|| Box::new(DeliciousClient::new())),
        );
        registry
    }

    /// Installs a factory under a canonical name.
    ///
    /// An existing entry under the same name is replaced.
    pub fn register(&mut self, name: ServiceName, factory: ClientFactory) {
        self.factories.insert(name, factory);
    }

    /// Looks up the factory registered under a canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`TaggingDomainError::UnknownService`] when no factory is
    /// registered under `name`.
    pub fn resolve(&self, name: &ServiceName) -> Result<&ClientFactory, TaggingDomainError> {
        self.factories
            .get(name)
            .ok_or_else(|| TaggingDomainError::UnknownService(name.clone()))
    }

    /// Returns the registered canonical names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &ServiceName> {
        self.factories.keys()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
