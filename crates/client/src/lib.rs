//! Remote diagnostic backend contract.
//!
//! This crate defines the request/response shapes of the diagnostic
//! service, the [`DiagnosticService`] trait the dispatcher is written
//! against, an HTTP implementation of it, and the typed events carried
//! by the push channel.

mod api;
mod http;
mod push;
mod types;

pub use api::{DiagnosticService, TransportError};
pub use http::HttpDiagnosticClient;
pub use push::{PushEvent, KUBECTL_LOG_EVENT, STATUS_UPDATE_EVENT};
pub use types::{
    BackendSnapshot, CheckResponse, DiagnosisReport, HealResponse, MonitorAck, ProbeResult,
    ProbeStatus,
};
