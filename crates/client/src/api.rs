//! Diagnostic service abstraction.

use crate::types::{BackendSnapshot, CheckResponse, HealResponse, MonitorAck};
use async_trait::async_trait;

/// Errors that can occur talking to the diagnostic backend.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network or protocol failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status
    #[error("backend returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },
}

/// The four remote operations of the diagnostic backend, plus its
/// status snapshot.
///
/// The dispatcher is written against this trait so tests can substitute
/// a scripted backend.
#[async_trait]
pub trait DiagnosticService: Send + Sync {
    /// Run an on-demand health check against `url`.
    async fn check_website(&self, url: &str) -> Result<CheckResponse, TransportError>;

    /// Ask the backend to inject a fault against `url`. The response
    /// body is opaque and ignored.
    async fn inject_fault(&self, url: &str) -> Result<(), TransportError>;

    /// Register `url` for continuous monitoring.
    async fn start_monitoring(&self, url: &str) -> Result<MonitorAck, TransportError>;

    /// Ask the backend to auto-heal `url`.
    async fn auto_heal(&self, url: &str) -> Result<HealResponse, TransportError>;

    /// Fetch the backend's own status snapshot.
    async fn fetch_status(&self) -> Result<BackendSnapshot, TransportError>;
}
