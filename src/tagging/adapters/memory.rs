//! In-memory scripted client adapter for tagging dispatch tests.

use crate::tagging::domain::{ApiKey, Credentials, ServiceName, Tag};
use crate::tagging::ports::{
    AcceptsApiKey, AcceptsCredentials, TaggingClient, TaggingClientError, TaggingClientResult,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

/// Scriptable in-memory tagging client.
///
/// This adapter models client behaviour without any vendor exchange. It is
/// suitable for unit, integration, and behaviour tests: queued responses
/// are returned in order, every received content string is recorded, and
/// capability support is toggled per instance so each configuration path
/// can be exercised.
///
/// Clones share state, so a factory can hand out fresh boxed clones while
/// one [`ScriptedClientHandle`] observes everything they receive.
#[derive(Debug, Clone)]
pub struct ScriptedClient {
    name: ServiceName,
    supports_api_key: bool,
    supports_credentials: bool,
    state: Arc<RwLock<ScriptedState>>,
}

#[derive(Debug, Default)]
struct ScriptedState {
    queued: VecDeque<TaggingClientResult<Vec<Tag>>>,
    calls: Vec<String>,
    applied_api_keys: Vec<ApiKey>,
    applied_credentials: Vec<Credentials>,
}

impl ScriptedClient {
    /// Creates a client with no configuration capabilities.
    #[must_use]
    pub fn new(name: ServiceName) -> Self {
        Self {
            name,
            supports_api_key: false,
            supports_credentials: false,
            state: Arc::default(),
        }
    }

    /// Enables the API-key capability on this instance.
    #[must_use]
    pub const fn with_api_key_support(mut self) -> Self {
        self.supports_api_key = true;
        self
    }

    /// Enables the credentials capability on this instance.
    #[must_use]
    pub const fn with_credentials_support(mut self) -> Self {
        self.supports_credentials = true;
        self
    }

    /// Returns a handle observing this client's shared state.
    #[must_use]
    pub fn handle(&self) -> ScriptedClientHandle {
        ScriptedClientHandle {
            name: self.name.clone(),
            state: Arc::clone(&self.state),
        }
    }

    fn write_state(&self) -> TaggingClientResult<RwLockWriteGuard<'_, ScriptedState>> {
        self.state.write().map_err(|err| {
            TaggingClientError::transport(self.name.clone(), std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaggingClient for ScriptedClient {
    fn service_name(&self) -> &ServiceName {
        &self.name
    }

    async fn get_tags(&self, content: &str) -> TaggingClientResult<Vec<Tag>> {
        let mut state = self.write_state()?;
        state.calls.push(content.to_owned());
        state.queued.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn api_key_capability(&mut self) -> Option<&mut dyn AcceptsApiKey> {
        if self.supports_api_key { Some(self) } else { None }
    }

    fn credentials_capability(&mut self) -> Option<&mut dyn AcceptsCredentials> {
        if self.supports_credentials { Some(self) } else { None }
    }
}

impl AcceptsApiKey for ScriptedClient {
    fn set_api_key(&mut self, key: ApiKey) {
        // a poisoned lock means a test thread already panicked
        if let Ok(mut state) = self.state.write() {
            state.applied_api_keys.push(key);
        }
    }
}

impl AcceptsCredentials for ScriptedClient {
    fn set_credentials(&mut self, credentials: Credentials) {
        // a poisoned lock means a test thread already panicked
        if let Ok(mut state) = self.state.write() {
            state.applied_credentials.push(credentials);
        }
    }
}

/// Observer and scripting handle over a [`ScriptedClient`]'s shared state.
#[derive(Debug, Clone)]
pub struct ScriptedClientHandle {
    name: ServiceName,
    state: Arc<RwLock<ScriptedState>>,
}

impl ScriptedClientHandle {
    /// Queues a tag batch to return from the next unanswered call.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn queue_tags(&self, tags: Vec<Tag>) -> TaggingClientResult<()> {
        let mut state = self.write_state()?;
        state.queued.push_back(Ok(tags));
        Ok(())
    }

    /// Queues a failure to return from the next unanswered call.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn queue_failure(&self, error: TaggingClientError) -> TaggingClientResult<()> {
        let mut state = self.write_state()?;
        state.queued.push_back(Err(error));
        Ok(())
    }

    /// Returns every content string received, in call order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn calls(&self) -> TaggingClientResult<Vec<String>> {
        Ok(self.read_state()?.calls.clone())
    }

    /// Returns every API key applied through the capability, in order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn applied_api_keys(&self) -> TaggingClientResult<Vec<ApiKey>> {
        Ok(self.read_state()?.applied_api_keys.clone())
    }

    /// Returns every credentials pair applied through the capability, in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn applied_credentials(&self) -> TaggingClientResult<Vec<Credentials>> {
        Ok(self.read_state()?.applied_credentials.clone())
    }

    fn write_state(&self) -> TaggingClientResult<RwLockWriteGuard<'_, ScriptedState>> {
        self.state.write().map_err(|err| {
            TaggingClientError::transport(self.name.clone(), std::io::Error::other(err.to_string()))
        })
    }

    fn read_state(&self) -> TaggingClientResult<std::sync::RwLockReadGuard<'_, ScriptedState>> {
        self.state.read().map_err(|err| {
            TaggingClientError::transport(self.name.clone(), std::io::Error::other(err.to_string()))
        })
    }
}
