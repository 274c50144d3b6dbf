//! Status state machine.

use std::time::Instant;
use vigil_core::{Diagnosis, MttrMetric, PatternRecognition, SystemStatus};

/// Owner of the dashboard's overall status and the display fields that
/// move with it: confidence, reason, diagnosis, pattern summary and
/// the round-trip MTTR metric.
///
/// Each transition method performs one complete update of every field
/// it touches; callers never mutate fields piecemeal.
#[derive(Debug)]
pub struct StatusController {
    status: SystemStatus,
    reason: String,
    confidence: u8,
    diagnosis: Option<Diagnosis>,
    pattern: Option<PatternRecognition>,
    mttr: Option<MttrMetric>,
    action_began: Option<Instant>,
}

impl Default for StatusController {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusController {
    /// Initial state: healthy, no incidents, nothing measured.
    pub fn new() -> Self {
        Self {
            status: SystemStatus::Healthy,
            reason: "No incidents".to_string(),
            confidence: 0,
            diagnosis: None,
            pattern: None,
            mttr: None,
            action_began: None,
        }
    }

    /// A health check was dispatched: clear the previous diagnosis and
    /// pattern summary, start the MTTR timer, go to `Analyzing`.
    pub fn begin_check(&mut self) {
        self.status = SystemStatus::Analyzing;
        self.diagnosis = None;
        self.pattern = None;
        self.action_began = Some(Instant::now());
    }

    /// A check response arrived. Stops the timer, installs the new
    /// diagnosis wholesale, and lands on `Healthy` or `IssuesDetected`
    /// depending on the probe result.
    pub fn complete_check(
        &mut self,
        healthy: bool,
        diagnosis: Diagnosis,
        pattern: PatternRecognition,
    ) {
        self.stop_timer();
        self.confidence = diagnosis.confidence;
        self.reason = diagnosis.root_cause.clone();
        self.diagnosis = Some(diagnosis);
        self.pattern = Some(pattern);
        self.status = if healthy {
            SystemStatus::Healthy
        } else {
            SystemStatus::IssuesDetected
        };
    }

    /// A check failed at the transport level. The failure is displayed
    /// as `IssuesDetected`, the same status as a genuine detected
    /// issue; the MTTR timer still stops.
    pub fn fail_check(&mut self) {
        self.stop_timer();
        self.status = SystemStatus::IssuesDetected;
    }

    /// A fault injection was dispatched. `Simulating` has no terminal
    /// transition of its own; it is left in place until the next
    /// action or a push status update.
    pub fn begin_simulate(&mut self) {
        self.status = SystemStatus::Simulating;
        self.pattern = None;
    }

    /// An auto-heal request was dispatched.
    pub fn begin_auto_heal(&mut self) {
        self.status = SystemStatus::AutoHealing;
        self.pattern = None;
        self.action_began = Some(Instant::now());
    }

    /// An auto-heal response arrived. Success lands on `Healthy`; a
    /// logical failure keeps the controller in `AutoHealing` (no
    /// automatic revert) while the caller surfaces the message.
    pub fn complete_heal(&mut self, success: bool) {
        self.stop_timer();
        if success {
            self.status = SystemStatus::Healthy;
        }
    }

    /// An auto-heal request failed at the transport level.
    pub fn fail_heal(&mut self) {
        self.stop_timer();
        self.status = SystemStatus::Error;
    }

    /// The push channel reported a status. It has final authority over
    /// the displayed status and may overwrite a transient one at any
    /// time, regardless of in-flight actions.
    pub fn report_status(&mut self, status: SystemStatus) {
        self.status = status;
    }

    /// Record the elapsed MTTR if a timer is running. A completion
    /// without a matching begin leaves the previous metric in place.
    fn stop_timer(&mut self) {
        if let Some(began) = self.action_began.take() {
            self.mttr = Some(MttrMetric::from_elapsed(began.elapsed()));
        }
    }

    /// Current status.
    pub fn status(&self) -> &SystemStatus {
        &self.status
    }

    /// Reason line for the current status.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Confidence of the current diagnosis, 0-100.
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    /// Diagnosis from the most recent successful check, if any.
    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }

    /// Pattern summary from the most recent successful check, if any.
    pub fn pattern(&self) -> Option<&PatternRecognition> {
        self.pattern.as_ref()
    }

    /// Round-trip latency of the most recent check or auto-heal.
    pub fn mttr(&self) -> Option<MttrMetric> {
        self.mttr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_diagnosis(confidence: u8) -> Diagnosis {
        Diagnosis {
            root_cause: "Server overload".to_string(),
            confidence,
            error_explanation: None,
            fix_steps: vec!["Restart pod".to_string()],
            estimated_fix_time: "5m".to_string(),
            prevention: Vec::new(),
        }
    }

    fn sample_pattern() -> PatternRecognition {
        PatternRecognition {
            detected: true,
            patterns: vec!["Status Code: Error Detected".to_string()],
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = StatusController::new();
        assert_eq!(controller.status(), &SystemStatus::Healthy);
        assert_eq!(controller.reason(), "No incidents");
        assert_eq!(controller.confidence(), 0);
        assert!(controller.diagnosis().is_none());
        assert!(controller.mttr().is_none());
    }

    #[test]
    fn test_begin_check_clears_previous_results() {
        let mut controller = StatusController::new();
        controller.begin_check();
        controller.complete_check(false, sample_diagnosis(87), sample_pattern());

        controller.begin_check();
        assert_eq!(controller.status(), &SystemStatus::Analyzing);
        assert!(controller.diagnosis().is_none());
        assert!(controller.pattern().is_none());
    }

    #[test]
    fn test_complete_check_with_issues() {
        let mut controller = StatusController::new();
        controller.begin_check();
        controller.complete_check(false, sample_diagnosis(87), sample_pattern());

        assert_eq!(controller.status(), &SystemStatus::IssuesDetected);
        assert_eq!(controller.confidence(), 87);
        assert_eq!(controller.reason(), "Server overload");
        assert!(controller.mttr().is_some());
    }

    #[test]
    fn test_complete_check_healthy() {
        let mut controller = StatusController::new();
        controller.begin_check();
        controller.complete_check(true, sample_diagnosis(95), sample_pattern());
        assert_eq!(controller.status(), &SystemStatus::Healthy);
    }

    #[test]
    fn test_failed_check_lands_on_issues_detected() {
        let mut controller = StatusController::new();
        controller.begin_check();
        controller.fail_check();

        assert_eq!(controller.status(), &SystemStatus::IssuesDetected);
        assert!(controller.mttr().is_some());
    }

    #[test]
    fn test_heal_success_lands_on_healthy() {
        let mut controller = StatusController::new();
        controller.begin_auto_heal();
        assert_eq!(controller.status(), &SystemStatus::AutoHealing);

        controller.complete_heal(true);
        assert_eq!(controller.status(), &SystemStatus::Healthy);
        assert!(controller.mttr().is_some());
    }

    #[test]
    fn test_heal_logical_failure_stays_in_auto_healing() {
        let mut controller = StatusController::new();
        controller.begin_auto_heal();
        controller.complete_heal(false);
        assert_eq!(controller.status(), &SystemStatus::AutoHealing);
    }

    #[test]
    fn test_heal_completion_without_begin_keeps_last_mttr() {
        let mut controller = StatusController::new();
        controller.begin_check();
        controller.complete_check(false, sample_diagnosis(87), sample_pattern());
        let check_mttr = controller.mttr().unwrap();

        // No begin_auto_heal: the check's metric must survive
        controller.complete_heal(false);
        assert_eq!(controller.mttr(), Some(check_mttr));
    }

    #[test]
    fn test_heal_transport_failure_lands_on_error() {
        let mut controller = StatusController::new();
        controller.begin_auto_heal();
        controller.fail_heal();
        assert_eq!(controller.status(), &SystemStatus::Error);
    }

    #[test]
    fn test_simulate_has_no_exit_of_its_own() {
        let mut controller = StatusController::new();
        controller.begin_simulate();
        assert_eq!(controller.status(), &SystemStatus::Simulating);

        // Only a later action or a push report moves it on
        controller.report_status(SystemStatus::Healthy);
        assert_eq!(controller.status(), &SystemStatus::Healthy);
    }

    #[test]
    fn test_push_report_overwrites_mid_check() {
        let mut controller = StatusController::new();
        controller.begin_check();
        controller.report_status(SystemStatus::from_report("Degraded"));
        assert_eq!(
            controller.status(),
            &SystemStatus::Reported("Degraded".to_string())
        );
    }
}
