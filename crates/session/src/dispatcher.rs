//! Action dispatch against the diagnostic backend.

use crate::event::SessionEvent;
use crate::session::SharedSession;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};
use vigil_client::{BackendSnapshot, DiagnosticService, MonitorAck, TransportError};
use vigil_core::{Diagnosis, MttrMetric, PatternRecognition, SystemStatus};

/// Fault injection targets this endpoint when the caller gives none.
pub const DEFAULT_FAULT_URL: &str = "http://httpstat.us/500";

/// Identifier for one dispatched action, used in log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionId(pub String);

impl ActionId {
    /// Create a new action ID.
    pub fn new() -> Self {
        Self(format!("act_{}", ulid::Ulid::new()))
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors an action can report to its caller.
///
/// Transport failures of check, inject and auto-heal never surface
/// here; they are converted into status transitions at the dispatch
/// boundary. Only monitoring registration and the status snapshot
/// report transport failures to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// A required URL was empty or absent; rejected before any state
    /// mutation
    #[error("validation error: {0}")]
    Validation(String),

    /// The backend could not be reached
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// What a health check produced.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// The backend answered; state was folded in
    Completed {
        /// Whether the target looked healthy
        healthy: bool,
        /// The installed diagnosis
        diagnosis: Diagnosis,
        /// The derived pattern summary
        pattern: PatternRecognition,
        /// Client round-trip latency
        mttr: Option<MttrMetric>,
    },
    /// The request failed in transit; displayed as detected issues
    TransportFailed {
        /// Client round-trip latency until the failure
        mttr: Option<MttrMetric>,
    },
}

/// What an auto-heal produced.
#[derive(Debug, Clone)]
pub enum HealOutcome {
    /// Remediation was applied
    Healed {
        /// Backend-reported healing duration
        healing_time: String,
        /// Client round-trip latency
        mttr: Option<MttrMetric>,
    },
    /// The backend declined to heal; status stays `AutoHealing`
    Rejected {
        /// User-facing message from the backend
        message: String,
    },
    /// The request failed in transit; status is `Error`
    TransportFailed,
}

/// Coordinator for the four remote operations. One outstanding request
/// per invocation; starting a new action does not cancel a previous
/// in-flight one, and the last completion to apply wins.
pub struct ActionDispatcher {
    service: Arc<dyn DiagnosticService>,
    session: SharedSession,
}

impl ActionDispatcher {
    /// Create a dispatcher driving `session` from `service` outcomes.
    pub fn new(service: Arc<dyn DiagnosticService>, session: SharedSession) -> Self {
        Self { service, session }
    }

    /// Run an on-demand health check. Rejects an empty URL before any
    /// state changes; transport failures land as `IssuesDetected`
    /// rather than propagating.
    pub async fn check_website(&self, url: &str) -> Result<CheckOutcome, ActionError> {
        let url = required_url(url, "website URL is required")?;
        let id = ActionId::new();
        info!("[{}] checking {}", id, url);

        self.session.lock().await.apply(SessionEvent::CheckStarted);

        match self.service.check_website(url).await {
            Ok(response) => {
                let healthy = !response.result.is_error();
                let (diagnosis, pattern) = crate::aggregate::aggregate(&response);

                let mut session = self.session.lock().await;
                session.apply(SessionEvent::CheckCompleted(response));
                let mttr = session.controller().mttr();
                info!("[{}] check complete: {}", id, session.controller().status());

                Ok(CheckOutcome::Completed {
                    healthy,
                    diagnosis,
                    pattern,
                    mttr,
                })
            }
            Err(err) => {
                warn!("[{}] check failed: {}", id, err);
                let mut session = self.session.lock().await;
                session.apply(SessionEvent::CheckFailed);
                Ok(CheckOutcome::TransportFailed {
                    mttr: session.controller().mttr(),
                })
            }
        }
    }

    /// Ask the backend to inject a fault. The URL defaults to
    /// [`DEFAULT_FAULT_URL`]; transport failures are swallowed after
    /// logging, with no status change.
    pub async fn simulate_failure(&self, url: Option<&str>) {
        let url = match url {
            Some(u) if !u.trim().is_empty() => u,
            _ => DEFAULT_FAULT_URL,
        };
        let id = ActionId::new();
        info!("[{}] injecting fault against {}", id, url);

        self.session
            .lock()
            .await
            .apply(SessionEvent::SimulateStarted);

        if let Err(err) = self.service.inject_fault(url).await {
            warn!("[{}] fault injection failed: {}", id, err);
        }
    }

    /// Register a URL for continuous monitoring. Success is recorded
    /// in the registry and acknowledged to the caller; a transport
    /// failure is reported to the caller without any status change.
    pub async fn start_monitoring(&self, url: &str) -> Result<MonitorAck, ActionError> {
        let url = required_url(url, "website URL is required")?;
        let id = ActionId::new();
        info!("[{}] registering {} for monitoring", id, url);

        let ack = self.service.start_monitoring(url).await?;
        self.session
            .lock()
            .await
            .apply(SessionEvent::MonitorConfirmed {
                url: url.to_string(),
            });
        Ok(ack)
    }

    /// Ask the backend to auto-heal a URL. A logical refusal keeps the
    /// status at `AutoHealing` and surfaces the backend's message; a
    /// transport failure lands on `Error`.
    pub async fn auto_heal(&self, url: &str) -> Result<HealOutcome, ActionError> {
        let url = required_url(url, "website URL is required")?;
        let id = ActionId::new();
        info!("[{}] auto-healing {}", id, url);

        self.session.lock().await.apply(SessionEvent::HealStarted);

        match self.service.auto_heal(url).await {
            Ok(response) => {
                let success = response.success;
                let healing_time = response.healing_time.clone();
                let message = response.message.clone();

                let mut session = self.session.lock().await;
                session.apply(SessionEvent::HealCompleted(response));

                if success {
                    info!("[{}] healed in {}", id, healing_time);
                    Ok(HealOutcome::Healed {
                        healing_time,
                        mttr: session.controller().mttr(),
                    })
                } else {
                    warn!("[{}] heal rejected: {}", id, message);
                    Ok(HealOutcome::Rejected { message })
                }
            }
            Err(err) => {
                error!("[{}] auto-heal failed: {}", id, err);
                self.session.lock().await.apply(SessionEvent::HealFailed);
                Ok(HealOutcome::TransportFailed)
            }
        }
    }

    /// Fetch the backend's own status snapshot. Read-only; no session
    /// mutation.
    pub async fn fetch_status(&self) -> Result<BackendSnapshot, ActionError> {
        Ok(self.service.fetch_status().await?)
    }

    /// Whether the dashboard currently shows detected issues, the
    /// state in which auto-heal is offered.
    pub async fn issues_detected(&self) -> bool {
        self.session.lock().await.controller().status() == &SystemStatus::IssuesDetected
    }
}

fn required_url<'a>(url: &'a str, message: &str) -> Result<&'a str, ActionError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ActionError::Validation(message.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use async_trait::async_trait;
    use vigil_client::{CheckResponse, HealResponse};

    /// Backend stand-in scripted per operation. `None` means fail with
    /// a transport error.
    #[derive(Default)]
    struct ScriptedService {
        check: Option<CheckResponse>,
        heal: Option<HealResponse>,
        monitor_ok: bool,
        inject_ok: bool,
    }

    fn transport_error() -> TransportError {
        TransportError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        }
    }

    #[async_trait]
    impl DiagnosticService for ScriptedService {
        async fn check_website(&self, _url: &str) -> Result<CheckResponse, TransportError> {
            self.check.clone().ok_or_else(transport_error)
        }

        async fn inject_fault(&self, _url: &str) -> Result<(), TransportError> {
            if self.inject_ok {
                Ok(())
            } else {
                Err(transport_error())
            }
        }

        async fn start_monitoring(&self, url: &str) -> Result<MonitorAck, TransportError> {
            if self.monitor_ok {
                Ok(MonitorAck {
                    message: format!("Started monitoring {}", url),
                    url: url.to_string(),
                })
            } else {
                Err(transport_error())
            }
        }

        async fn auto_heal(&self, _url: &str) -> Result<HealResponse, TransportError> {
            self.heal.clone().ok_or_else(transport_error)
        }

        async fn fetch_status(&self) -> Result<BackendSnapshot, TransportError> {
            Err(transport_error())
        }
    }

    fn error_check_response() -> CheckResponse {
        serde_json::from_value(serde_json::json!({
            "result": {"status": "error", "response_time": 312},
            "diagnosis": {
                "root_cause": "Server overload",
                "confidence": 87,
                "fix_steps": ["Restart pod", "Scale up"],
                "estimated_fix_time": "5m"
            }
        }))
        .unwrap()
    }

    fn dispatcher(service: ScriptedService) -> (ActionDispatcher, SharedSession) {
        let session = Session::shared();
        (
            ActionDispatcher::new(Arc::new(service), session.clone()),
            session,
        )
    }

    #[tokio::test]
    async fn test_empty_url_rejected_without_state_change() {
        let (dispatcher, session) = dispatcher(ScriptedService::default());
        session
            .lock()
            .await
            .apply(SessionEvent::LogLine("pre-existing".to_string()));

        let result = dispatcher.check_website("").await;
        assert!(matches!(result, Err(ActionError::Validation(_))));

        let session = session.lock().await;
        assert_eq!(session.controller().status(), &SystemStatus::Healthy);
        assert!(session.controller().diagnosis().is_none());
        // The log buffer was not reset either
        assert_eq!(session.logs().len(), 1);
    }

    #[tokio::test]
    async fn test_successful_check_with_issues() {
        let (dispatcher, session) = dispatcher(ScriptedService {
            check: Some(error_check_response()),
            ..Default::default()
        });

        let outcome = dispatcher.check_website("https://a.com").await.unwrap();
        match outcome {
            CheckOutcome::Completed {
                healthy,
                diagnosis,
                pattern,
                mttr,
            } => {
                assert!(!healthy);
                assert_eq!(diagnosis.confidence, 87);
                assert_eq!(pattern.patterns[1], "Response Time: 312ms");
                assert!(mttr.is_some());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let session = session.lock().await;
        assert_eq!(session.controller().status(), &SystemStatus::IssuesDetected);
    }

    #[tokio::test]
    async fn test_check_transport_failure_lands_on_issues_detected() {
        let (dispatcher, session) = dispatcher(ScriptedService::default());

        let outcome = dispatcher.check_website("https://a.com").await.unwrap();
        assert!(matches!(outcome, CheckOutcome::TransportFailed { .. }));

        let session = session.lock().await;
        assert_eq!(session.controller().status(), &SystemStatus::IssuesDetected);
    }

    #[tokio::test]
    async fn test_simulate_defaults_url_and_swallows_failure() {
        let (dispatcher, session) = dispatcher(ScriptedService::default());

        // inject_ok is false: the transport failure must not surface
        dispatcher.simulate_failure(None).await;

        let session = session.lock().await;
        assert_eq!(session.controller().status(), &SystemStatus::Simulating);
        assert!(session.logs().is_empty());
    }

    #[tokio::test]
    async fn test_monitoring_registers_once() {
        let (dispatcher, session) = dispatcher(ScriptedService {
            monitor_ok: true,
            ..Default::default()
        });

        dispatcher.start_monitoring("https://a.com").await.unwrap();
        dispatcher.start_monitoring("https://a.com").await.unwrap();

        let session = session.lock().await;
        assert_eq!(session.registry().len(), 1);
        assert_eq!(session.controller().status(), &SystemStatus::Healthy);
    }

    #[tokio::test]
    async fn test_monitoring_transport_failure_reported_to_caller() {
        let (dispatcher, session) = dispatcher(ScriptedService::default());

        let result = dispatcher.start_monitoring("https://a.com").await;
        assert!(matches!(result, Err(ActionError::Transport(_))));

        let session = session.lock().await;
        assert!(session.registry().is_empty());
        assert_eq!(session.controller().status(), &SystemStatus::Healthy);
    }

    #[tokio::test]
    async fn test_auto_heal_success() {
        let (dispatcher, session) = dispatcher(ScriptedService {
            heal: Some(HealResponse {
                success: true,
                healing_time: "12s".to_string(),
                message: String::new(),
            }),
            ..Default::default()
        });

        let outcome = dispatcher.auto_heal("https://a.com").await.unwrap();
        match outcome {
            HealOutcome::Healed { healing_time, mttr } => {
                assert_eq!(healing_time, "12s");
                assert!(mttr.is_some());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let session = session.lock().await;
        assert_eq!(session.controller().status(), &SystemStatus::Healthy);
    }

    #[tokio::test]
    async fn test_auto_heal_rejection_keeps_auto_healing() {
        let (dispatcher, session) = dispatcher(ScriptedService {
            heal: Some(HealResponse {
                success: false,
                healing_time: String::new(),
                message: "Nothing to heal".to_string(),
            }),
            ..Default::default()
        });

        let outcome = dispatcher.auto_heal("https://a.com").await.unwrap();
        assert!(
            matches!(outcome, HealOutcome::Rejected { ref message } if message == "Nothing to heal")
        );

        let session = session.lock().await;
        assert_eq!(session.controller().status(), &SystemStatus::AutoHealing);
    }

    #[tokio::test]
    async fn test_auto_heal_transport_failure_lands_on_error() {
        let (dispatcher, session) = dispatcher(ScriptedService::default());

        let outcome = dispatcher.auto_heal("https://a.com").await.unwrap();
        assert!(matches!(outcome, HealOutcome::TransportFailed));

        let session = session.lock().await;
        assert_eq!(session.controller().status(), &SystemStatus::Error);
    }
}
