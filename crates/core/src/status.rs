//! Overall system status as shown on the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dashboard's current status. Exactly one value is active at any
/// time, owned by the status controller.
///
/// The push channel may report status strings outside the closed set;
/// those are carried verbatim in [`SystemStatus::Reported`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    /// No incidents
    Healthy,
    /// A health check is in flight
    Analyzing,
    /// The last check detected (or failed with) an issue
    IssuesDetected,
    /// A fault injection is in flight. No terminal transition of its
    /// own exists; the state is left until the next action or a push
    /// status update.
    Simulating,
    /// An auto-heal request is in flight
    AutoHealing,
    /// Auto-heal failed at the transport level
    Error,
    /// A status string pushed by the backend outside the closed set
    Reported(String),
}

impl SystemStatus {
    /// Parse a status string reported over the push channel. Known
    /// dashboard strings map back to their variants; anything else is
    /// carried as [`SystemStatus::Reported`].
    pub fn from_report(s: &str) -> Self {
        match s {
            "Healthy" => SystemStatus::Healthy,
            "Analyzing..." => SystemStatus::Analyzing,
            "Issues Detected" => SystemStatus::IssuesDetected,
            "Simulating..." => SystemStatus::Simulating,
            "Auto-Healing..." => SystemStatus::AutoHealing,
            "Error" => SystemStatus::Error,
            other => SystemStatus::Reported(other.to_string()),
        }
    }

    /// Whether this is a transient in-flight status.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SystemStatus::Analyzing | SystemStatus::Simulating | SystemStatus::AutoHealing
        )
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemStatus::Healthy => write!(f, "Healthy"),
            SystemStatus::Analyzing => write!(f, "Analyzing..."),
            SystemStatus::IssuesDetected => write!(f, "Issues Detected"),
            SystemStatus::Simulating => write!(f, "Simulating..."),
            SystemStatus::AutoHealing => write!(f, "Auto-Healing..."),
            SystemStatus::Error => write!(f, "Error"),
            SystemStatus::Reported(s) => write!(f, "{}", s),
        }
    }
}
