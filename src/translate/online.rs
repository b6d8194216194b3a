use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::{ConnectivityProbe, OnlineTranslator};
use crate::error::{BoliError, Result};
use crate::language::LanguagePair;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_PROBE_URL: &str = "https://www.google.com";

/// Client for the public Google web-translate endpoint.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("boli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Concatenate the translated segments of a response.
    ///
    /// The endpoint answers with nested arrays where the first element holds
    /// one `[translated, original, ...]` entry per sentence segment.
    fn parse_response(body: &Value) -> Result<String> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| BoliError::ExternalService("Unexpected response layout".to_string()))?;

        let translation: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        let translation = translation.trim();
        if translation.is_empty() {
            return Err(BoliError::ExternalService("Empty translation received".to_string()));
        }
        Ok(translation.to_string())
    }
}

#[async_trait]
impl OnlineTranslator for GoogleTranslator {
    async fn translate(&self, text: &str, pair: LanguagePair) -> Result<String> {
        if !pair.is_online_eligible() {
            return Err(BoliError::ExternalService(format!(
                "Online translation does not support {}",
                pair
            )));
        }

        debug!("Sending translation request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", pair.source.code()),
                ("tl", pair.target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| BoliError::ExternalService(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(BoliError::ExternalService(format!(
                "Translate API error {}: {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| BoliError::ExternalService(format!("Failed to parse response: {}", e)))?;

        let translation = Self::parse_response(&body)?;
        debug!("Online translation [{}] '{}' -> '{}'", pair, text, translation);
        Ok(translation)
    }
}

/// Treats any HTTP response from the probe URL as "online".
pub struct HttpConnectivityProbe {
    client: Client,
    url: String,
}

impl HttpConnectivityProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ConnectivityProbe for HttpConnectivityProbe {
    async fn is_reachable(&self) -> bool {
        match self.client.get(&self.url).send().await {
            Ok(response) => {
                debug!("Connectivity probe {} -> {}", self.url, response.status());
                true
            }
            Err(e) => {
                info!("No connection to {}: {}", self.url, e);
                false
            }
        }
    }
}
