//! Wire types for the diagnostic backend.

use serde::{Deserialize, Serialize};

/// Outcome of probing the target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// Target responded without error
    Healthy,
    /// Target failed or responded with an error status
    Error,
}

/// The `result` half of a check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Whether the target looked healthy
    pub status: ProbeStatus,

    /// Target response time in milliseconds, possibly fractional
    pub response_time: f64,
}

impl ProbeResult {
    /// Whether the probe detected an error.
    pub fn is_error(&self) -> bool {
        self.status == ProbeStatus::Error
    }
}

/// The `diagnosis` half of a check response, as reported by the
/// backend. Confidence arrives unconstrained here; the aggregator
/// clamps it into range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisReport {
    /// Short root-cause statement
    pub root_cause: String,

    /// Reported confidence; nominally 0-100 but not guaranteed
    pub confidence: i64,

    /// Longer explanation, when the backend has one
    #[serde(default)]
    pub error_explanation: Option<String>,

    /// Recommended fixes, in order
    pub fix_steps: Vec<String>,

    /// Human-readable fix time estimate
    pub estimated_fix_time: String,

    /// Preventive measures; older backends omit the field
    #[serde(default)]
    pub prevention: Vec<String>,
}

/// Response to `POST /check-website`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Probe outcome
    pub result: ProbeResult,

    /// Root-cause diagnosis
    pub diagnosis: DiagnosisReport,
}

/// Response to `POST /auto-heal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealResponse {
    /// Whether remediation was applied
    pub success: bool,

    /// How long healing took, e.g. "12s"
    #[serde(default)]
    pub healing_time: String,

    /// User-facing message, set when healing was not applied
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement of `POST /monitor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorAck {
    /// Confirmation message
    #[serde(default)]
    pub message: String,

    /// The URL now under monitoring
    #[serde(default)]
    pub url: String,
}

/// The backend's own status snapshot, from `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSnapshot {
    /// Backend-reported status string
    pub status: String,

    /// Backend-reported MTTR display value
    pub mttr: String,

    /// Backend-reported reason line
    pub reason: String,

    /// URLs the backend is monitoring
    #[serde(default)]
    pub monitored_urls: Vec<String>,

    /// Whether continuous monitoring is running
    #[serde(default)]
    pub monitoring_active: bool,
}
