//! The owned dashboard session and its event application loop.

use crate::aggregate::aggregate;
use crate::controller::StatusController;
use crate::event::SessionEvent;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;
use vigil_client::PushEvent;
use vigil_core::{LogStreamBuffer, MonitoredSiteRegistry, SystemStatus};

/// Session state shared between the dispatcher and the push routing
/// loop. The mutex is the single mutation queue: every transition goes
/// through [`Session::apply`] under it, so the two event sources
/// interleave deterministically.
pub type SharedSession = Arc<Mutex<Session>>;

/// All mutable dashboard state for one session: the status machine,
/// the live-log buffer and the monitored-site registry. Created at
/// session start, dropped at session end.
#[derive(Debug, Default)]
pub struct Session {
    controller: StatusController,
    logs: LogStreamBuffer,
    registry: MonitoredSiteRegistry,
}

impl Session {
    /// Create a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session behind the shared lock.
    pub fn shared() -> SharedSession {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Apply one event as a single atomic state transition.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::CheckStarted => {
                self.logs.reset();
                self.controller.begin_check();
            }
            SessionEvent::CheckCompleted(response) => {
                let healthy = !response.result.is_error();
                let (diagnosis, pattern) = aggregate(&response);
                self.controller.complete_check(healthy, diagnosis, pattern);
            }
            SessionEvent::CheckFailed => {
                self.controller.fail_check();
            }
            SessionEvent::SimulateStarted => {
                self.logs.reset();
                self.controller.begin_simulate();
            }
            SessionEvent::MonitorConfirmed { url } => {
                self.registry.add_if_absent(url);
            }
            SessionEvent::HealStarted => {
                self.logs.reset();
                self.controller.begin_auto_heal();
            }
            SessionEvent::HealCompleted(response) => {
                self.controller.complete_heal(response.success);
            }
            SessionEvent::HealFailed => {
                self.controller.fail_heal();
            }
            SessionEvent::StatusReported(status) => {
                self.controller
                    .report_status(SystemStatus::from_report(&status));
            }
            SessionEvent::LogLine(line) => {
                self.logs.append(line);
            }
        }
    }

    /// The status machine and its display fields.
    pub fn controller(&self) -> &StatusController {
        &self.controller
    }

    /// The live-log buffer.
    pub fn logs(&self) -> &LogStreamBuffer {
        &self.logs
    }

    /// The monitored-site registry.
    pub fn registry(&self) -> &MonitoredSiteRegistry {
        &self.registry
    }
}

/// Consume push events until the channel closes, applying each to the
/// session in arrival order. Runs for the lifetime of the push
/// connection; reconnection is the transport adapter's problem.
pub async fn route_push_events(
    mut events: mpsc::UnboundedReceiver<PushEvent>,
    session: SharedSession,
) {
    while let Some(event) = events.recv().await {
        let mut session = session.lock().await;
        match event {
            PushEvent::StatusUpdate {
                status: Some(status),
            } => session.apply(SessionEvent::StatusReported(status)),
            // A status_update without a status field changes nothing
            PushEvent::StatusUpdate { status: None } => {}
            PushEvent::LogLine(line) => session.apply(SessionEvent::LogLine(line)),
        }
    }
    debug!("push channel closed");
}
