//! Yahoo term-extraction client adapter.

use crate::tagging::domain::{ServiceName, Tag};
use crate::tagging::ports::{TaggingClient, TaggingClientError, TaggingClientResult};
use async_trait::async_trait;
use serde_json::Value;

const ENDPOINT: &str = "https://query.yahooapis.com/v1/public/yql";

/// Client for the public Yahoo term-extraction endpoint.
///
/// The endpoint requires no authentication, so this client exposes no
/// configuration capability.
#[derive(Debug, Clone)]
pub struct YahooClient {
    name: ServiceName,
    http: reqwest::Client,
}

impl YahooClient {
    /// Creates a ready-to-use client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: ServiceName::from_canonical("yahoo"),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaggingClient for YahooClient {
    fn service_name(&self) -> &ServiceName {
        &self.name
    }

    async fn get_tags(&self, content: &str) -> TaggingClientResult<Vec<Tag>> {
        let query = term_extract_query(content);
        let response = self
            .http
            .get(ENDPOINT)
            .query(&[("q", query.as_str()), ("format", "json")])
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
}

fn term_extract_query(content: &str) -> String {
    let escaped = content.replace('\\', "\\\\").replace('"', "\\\"");
    format!("select * from search.termextract where context=\"{escaped}\"")
}

/// Pulls term labels out of a YQL term-extraction payload.
///
/// A `null` result set means the vendor found no terms; a single term
/// arrives as a bare string rather than a one-element array.
pub(crate) fn extract_tags(payload: &Value) -> TaggingClientResult<Vec<Tag>> {
    let name = ServiceName::from_canonical("yahoo");
    let Some(query) = payload.get("query") else {
        return Err(TaggingClientError::unexpected_response(
            name,
            "missing 'query' object",
        ));
    };

    match query.get("results") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(results) => match results.get("Result") {
            Some(Value::Array(terms)) => Ok(collect_labels(terms.iter())),
            Some(term @ Value::String(_)) => Ok(collect_labels(std::iter::once(term))),
            _ => Err(TaggingClientError::unexpected_response(
                name,
                "missing 'Result' terms",
            )),
        },
    }
}

fn collect_labels<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<Tag> {
    values
        .filter_map(Value::as_str)
        // empty labels from the vendor are dropped
        .filter_map(|label| Tag::new(label).ok())
        .collect()
}
