//! Alchemy ranked-keyword client adapter.

use crate::tagging::domain::{ApiKey, ServiceName, Tag};
use crate::tagging::ports::{AcceptsApiKey, TaggingClient, TaggingClientError, TaggingClientResult};
use async_trait::async_trait;
use serde_json::Value;

const ENDPOINT: &str = "https://access.alchemyapi.com/calls/text/TextGetRankedKeywords";

/// Client for the Alchemy ranked-keyword extraction endpoint.
#[derive(Debug, Clone)]
pub struct AlchemyClient {
    name: ServiceName,
    http: reqwest::Client,
    api_key: Option<ApiKey>,
}

impl AlchemyClient {
    /// Creates an unconfigured client; an API key must be applied before
    /// the first call.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: ServiceName::from_canonical("alchemy"),
            http: reqwest::Client::new(),
            api_key: None,
        }
    }
}

impl Default for AlchemyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaggingClient for AlchemyClient {
    fn service_name(&self) -> &ServiceName {
        &self.name
    }

    async fn get_tags(&self, content: &str) -> TaggingClientResult<Vec<Tag>> {
        let Some(key) = &self.api_key else {
            return Err(TaggingClientError::not_configured(
                self.name.clone(),
                "API key not set",
            ));
        };

        let response = self
            .http
            .get(ENDPOINT)
            .query(&[
                ("apikey", key.as_str()),
                ("text", content),
                ("outputMode", "json"),
            ])
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

impl AcceptsApiKey for AlchemyClient {
    fn set_api_key(&mut self, key: ApiKey) {
        self.api_key = Some(key);
    }
}

/// Pulls keyword labels out of an Alchemy ranked-keyword payload.
pub(crate) fn extract_tags(payload: &Value) -> TaggingClientResult<Vec<Tag>> {
    let name = ServiceName::from_canonical("alchemy");
    let status = payload.get("status").and_then(Value::as_str);
    if status != Some("OK") {
        let detail = payload
            .get("statusInfo")
            .and_then(Value::as_str)
            .unwrap_or("vendor status is not OK");
        return Err(TaggingClientError::unexpected_response(name, detail));
    }

    let Some(keywords) = payload.get("keywords").and_then(Value::as_array) else {
        return Err(TaggingClientError::unexpected_response(
            name,
            "missing 'keywords' array",
        ));
    };

    Ok(keywords
        .iter()
        .filter_map(|keyword| keyword.get("text"))
        .filter_map(Value::as_str)
        // empty labels from the vendor are dropped
        .filter_map(|label| Tag::new(label).ok())
        .collect())
}
