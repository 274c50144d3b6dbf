//! Typed events carried by the push channel.
//!
//! The transport itself (socket lifecycle, reconnection) lives outside
//! this crate; adapters decode incoming frames into [`PushEvent`] and
//! feed them to the session's routing loop.

use serde_json::Value;

/// Event name for status overwrites.
pub const STATUS_UPDATE_EVENT: &str = "status_update";

/// Event name for live log lines.
pub const KUBECTL_LOG_EVENT: &str = "kubectl_log";

/// A server-to-client push event. Events arrive and must be processed
/// in channel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    /// `status_update`: the backend overwrites the displayed status.
    /// `status` is absent when the payload carried no status field; the
    /// session ignores those.
    StatusUpdate {
        /// The reported status string, if present
        status: Option<String>,
    },

    /// `kubectl_log`: one live log line.
    LogLine(String),
}

impl PushEvent {
    /// Decode a named event and its JSON payload. Returns `None` for
    /// event names this core does not consume.
    pub fn decode(event: &str, payload: &Value) -> Option<Self> {
        match event {
            STATUS_UPDATE_EVENT => Some(PushEvent::StatusUpdate {
                status: payload
                    .get("status")
                    .and_then(Value::as_str)
                    .map(String::from),
            }),
            KUBECTL_LOG_EVENT => payload.as_str().map(|s| PushEvent::LogLine(s.to_string())),
            _ => None,
        }
    }
}
