//! Delicious suggested-tags client adapter.

use crate::tagging::domain::{Credentials, ServiceName, Tag};
use crate::tagging::ports::{
    AcceptsCredentials, TaggingClient, TaggingClientError, TaggingClientResult,
};
use async_trait::async_trait;
use serde_json::Value;

const ENDPOINT: &str = "https://api.del.icio.us/v1/json/posts/suggest";

/// Client for the Delicious suggested-tags endpoint.
///
/// Delicious authenticates with HTTP basic auth rather than an API key, so
/// this client exposes the credentials capability. Content passed to
/// `get_tags` is the URL to suggest tags for.
#[derive(Debug, Clone)]
pub struct DeliciousClient {
    name: ServiceName,
    http: reqwest::Client,
    credentials: Option<Credentials>,
}

impl DeliciousClient {
    /// Creates an unconfigured client; credentials must be applied before
    /// the first call.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: ServiceName::from_canonical("delicious"),
            http: reqwest::Client::new(),
            credentials: None,
        }
    }
}

impl Default for DeliciousClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaggingClient for DeliciousClient {
    fn service_name(&self) -> &ServiceName {
        &self.name
    }

    async fn get_tags(&self, content: &str) -> TaggingClientResult<Vec<Tag>> {
        let Some(credentials) = &self.credentials else {
            return Err(TaggingClientError::not_configured(
                self.name.clone(),
                "credentials not set",
            ));
        };

        let response = self
            .http
            .get(ENDPOINT)
            .query(&[("url", content)])
            .basic_auth(credentials.username(), Some(credentials.password()))
            .send()
            .await
            .map_err(|err| TaggingClientError::transport(self.name.clone(), err))?
            .error_for_status()
            .map_err(|err| TaggingClientError::transport(self.name.clone(), err))?;
        let payload: Value = response
            .json()
            .await
            .map_err(|err| TaggingClientError::transport(self.name.clone(), err))?;
        extract_tags(&payload)
    }

    fn credentials_capability(&mut self) -> Option<&mut dyn AcceptsCredentials> {
        Some(self)
    }
}

impl AcceptsCredentials for DeliciousClient {
    fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }
}

/// Pulls suggestion labels out of a Delicious suggest payload.
///
/// The payload is an array of suggestion groups (`popular`, `recommended`),
/// each mapping the group name to an array of tag strings.
pub(crate) fn extract_tags(payload: &Value) -> TaggingClientResult<Vec<Tag>> {
    let name = ServiceName::from_canonical("delicious");
    let Some(groups) = payload.as_array() else {
        return Err(TaggingClientError::unexpected_response(
            name,
            "payload is not an array of suggestion groups",
        ));
    };

    Ok(groups
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|group| group.values())
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(Value::as_str)
        // empty labels from the vendor are dropped
        .filter_map(|label| Tag::new(label).ok())
        .collect())
}
