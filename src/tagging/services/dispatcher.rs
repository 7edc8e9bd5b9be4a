//! Fan-out dispatcher over configured tagging-service clients.

use super::{ServiceRegistry, ServiceResolver};
use crate::tagging::domain::{ServiceDescriptor, Tag, TaggingDomainError};
use crate::tagging::ports::{TaggingClient, TaggingClientError};
use thiserror::Error;

/// Errors returned while aggregating tags across configured clients.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Tag aggregation was requested with no configured clients.
    #[error("no tagging services configured")]
    NoServiceConfiguration,

    /// A client call failed during fan-out.
    #[error(transparent)]
    Client(#[from] TaggingClientError),
}

/// Ordered collection of configured clients with fan-out tag aggregation.
///
/// The dispatcher owns its clients exclusively; they live until [`reset`]
/// or drop. It is a plain value, constructed wherever tagging is needed,
/// with no process-global state: callers needing cross-thread access wrap
/// it in their own synchronization.
///
/// [`reset`]: TaggingDispatcher::reset
pub struct TaggingDispatcher {
    resolver: ServiceResolver,
    clients: Vec<Box<dyn TaggingClient>>,
}

impl TaggingDispatcher {
    /// Creates an empty dispatcher resolving against the given registry.
    #[must_use]
    pub const fn new(registry: ServiceRegistry) -> Self {
        Self {
            resolver: ServiceResolver::new(registry),
            clients: Vec::new(),
        }
    }

    /// Creates an empty dispatcher over the built-in vendor registry.
    #[must_use]
    pub fn with_builtin_services() -> Self {
        Self::new(ServiceRegistry::builtin())
    }

    /// Resolves and appends one client per descriptor, in order.
    ///
    /// Configuration accumulates: existing clients are kept and the new
    /// ones are appended after them. The first failing descriptor halts
    /// processing; clients appended before the failure are retained.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors from [`ServiceResolver::resolve`]
    /// unchanged.
    pub fn configure_services<I>(&mut self, descriptors: I) -> Result<(), TaggingDomainError>
    where
        I: IntoIterator<Item = ServiceDescriptor>,
    {
        for descriptor in descriptors {
            self.add_service(&descriptor)?;
        }
        Ok(())
    }

    /// Resolves one descriptor and appends the configured client.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors from [`ServiceResolver::resolve`]
    /// unchanged; nothing is appended on failure.
    pub fn add_service(
        &mut self,
        descriptor: &ServiceDescriptor,
    ) -> Result<&dyn TaggingClient, TaggingDomainError> {
        let client = self.resolver.resolve(descriptor)?;
        Ok(push_client(&mut self.clients, client))
    }

    /// Returns the configured clients in insertion order.
    #[must_use]
    pub fn clients(&self) -> &[Box<dyn TaggingClient>] {
        &self.clients
    }

    /// Clears the client collection.
    ///
    /// Callable any number of times, including when already empty.
    pub fn reset(&mut self) {
        self.clients.clear();
    }

    /// Aggregates tags for `content` across every configured client.
    ///
    /// Clients are invoked sequentially in insertion order and their tag
    /// batches concatenated in that order. There is no timeout: a slow
    /// client call stalls the whole aggregation.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NoServiceConfiguration`] when no clients
    /// are configured. The first client failure is propagated immediately
    /// as [`DispatchError::Client`] and aborts the remaining fan-out; no
    /// partial aggregation is returned.
    pub async fn get_tags(&self, content: &str) -> Result<Vec<Tag>, DispatchError> {
        if self.clients.is_empty() {
            return Err(DispatchError::NoServiceConfiguration);
        }

        let mut tags = Vec::new();
        for client in &self.clients {
            let mut batch = client.get_tags(content).await?;
            tags.append(&mut batch);
        }
        Ok(tags)
    }
}

impl std::fmt::Debug for TaggingDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggingDispatcher")
            .field("resolver", &self.resolver)
            .field(
                "clients",
                &self
                    .clients
                    .iter()
                    .map(|client| client.service_name().as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn push_client<'a>(
    clients: &'a mut Vec<Box<dyn TaggingClient>>,
    client: Box<dyn TaggingClient>,
) -> &'a dyn TaggingClient {
    clients.push(client);
    #[expect(
        clippy::expect_used,
        reason = "a client was pushed on the preceding line"
    )]
    let appended = clients
        .last()
        .expect("client collection is non-empty after push");
    appended.as_ref()
}
