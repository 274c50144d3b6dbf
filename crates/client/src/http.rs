//! HTTP implementation of the diagnostic service.

use crate::api::{DiagnosticService, TransportError};
use crate::types::{BackendSnapshot, CheckResponse, HealResponse, MonitorAck};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

/// Diagnostic backend client over HTTP/JSON.
///
/// No request timeout is configured: a request that never resolves
/// leaves the dashboard in its transient status, matching the
/// dispatcher's contract.
#[derive(Clone)]
pub struct HttpDiagnosticClient {
    client: Client,
    base_url: String,
}

impl HttpDiagnosticClient {
    /// Create a client for the backend at `base_url`, e.g.
    /// `http://localhost:5001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, TransportError> {
        debug!("POST {}{}", self.base_url, path);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DiagnosticService for HttpDiagnosticClient {
    async fn check_website(&self, url: &str) -> Result<CheckResponse, TransportError> {
        self.post_json("/check-website", json!({ "url": url })).await
    }

    async fn inject_fault(&self, url: &str) -> Result<(), TransportError> {
        let _ack: serde_json::Value = self.post_json("/inject", json!({ "url": url })).await?;
        Ok(())
    }

    async fn start_monitoring(&self, url: &str) -> Result<MonitorAck, TransportError> {
        self.post_json("/monitor", json!({ "url": url })).await
    }

    async fn auto_heal(&self, url: &str) -> Result<HealResponse, TransportError> {
        self.post_json("/auto-heal", json!({ "url": url })).await
    }

    async fn fetch_status(&self) -> Result<BackendSnapshot, TransportError> {
        debug!("GET {}/status", self.base_url);

        let response = self
            .client
            .get(format!("{}/status", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
