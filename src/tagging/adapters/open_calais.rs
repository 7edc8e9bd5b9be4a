//! OpenCalais enrichment client adapter.

use crate::tagging::domain::{ApiKey, ServiceName, Tag};
use crate::tagging::ports::{AcceptsApiKey, TaggingClient, TaggingClientError, TaggingClientResult};
use async_trait::async_trait;
use serde_json::Value;

const ENDPOINT: &str = "https://api.opencalais.com/tag/rs/enrich";

/// Client for the OpenCalais content-enrichment endpoint.
#[derive(Debug, Clone)]
pub struct OpenCalaisClient {
    name: ServiceName,
    http: reqwest::Client,
    api_key: Option<ApiKey>,
}

impl OpenCalaisClient {
    /// Creates an unconfigured client; a license key must be applied before
    /// the first call.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: ServiceName::from_canonical("open_calais"),
            http: reqwest::Client::new(),
            api_key: None,
        }
    }
}

impl Default for OpenCalaisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaggingClient for OpenCalaisClient {
    fn service_name(&self) -> &ServiceName {
        &self.name
    }

    async fn get_tags(&self, content: &str) -> TaggingClientResult<Vec<Tag>> {
        let Some(key) = &self.api_key else {
            return Err(TaggingClientError::not_configured(
                self.name.clone(),
                "license key not set",
            ));
        };

        let response = self
            .http
            .post(ENDPOINT)
            .header("x-calais-licenseID", key.as_str())
            .header("Content-Type", "text/raw")
            .header("outputFormat", "application/json")
            .body(content.to_owned())
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

    fn api_key_capability(&mut self) -> Option<&mut dyn AcceptsApiKey> {
        Some(self)
    }
}

impl AcceptsApiKey for OpenCalaisClient {
    fn set_api_key(&mut self, key: ApiKey) {
        self.api_key = Some(key);
    }
}

/// Pulls entity and social-tag names out of an OpenCalais enrichment
/// payload.
///
/// The payload maps entity URIs to objects; the `doc` entry carries
/// request metadata and is skipped.
pub(crate) fn extract_tags(payload: &Value) -> TaggingClientResult<Vec<Tag>> {
    let name = ServiceName::from_canonical("open_calais");
    let Some(entries) = payload.as_object() else {
        return Err(TaggingClientError::unexpected_response(
            name,
            "payload is not an object",
        ));
    };

    Ok(entries
        .iter()
        .filter(|(key, _)| key.as_str() != "doc")
        .filter_map(|(_, entry)| entry.get("name"))
        .filter_map(Value::as_str)
        // empty labels from the vendor are dropped
        .filter_map(|label| Tag::new(label).ok())
        .collect())
}
