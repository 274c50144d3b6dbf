//! Session events - the only way dashboard state changes.

use vigil_client::{CheckResponse, HealResponse};

/// One state-changing occurrence, from either event source (user
/// actions or the push channel). [`crate::Session::apply`] turns each
/// into a single atomic transition.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A health check was dispatched
    CheckStarted,
    /// A health check response arrived
    CheckCompleted(CheckResponse),
    /// A health check failed at the transport level
    CheckFailed,

    /// A fault injection was dispatched
    SimulateStarted,

    /// The backend confirmed monitoring registration for a URL
    MonitorConfirmed {
        /// The registered URL
        url: String,
    },

    /// An auto-heal request was dispatched
    HealStarted,
    /// An auto-heal response arrived
    HealCompleted(HealResponse),
    /// An auto-heal request failed at the transport level
    HealFailed,

    /// The push channel reported a status string
    StatusReported(String),
    /// The push channel delivered a live log line
    LogLine(String),
}
