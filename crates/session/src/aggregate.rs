//! Diagnosis aggregation.

use vigil_client::CheckResponse;
use vigil_core::{Diagnosis, PatternRecognition};

/// Fold a raw check response into a displayable diagnosis and its
/// derived pattern-recognition summary.
///
/// Pure and deterministic; runs only on successful check responses,
/// so `detected` is always true. Out-of-range confidence values are
/// clamped into [0, 100]; in-range values pass through unmodified.
pub fn aggregate(response: &CheckResponse) -> (Diagnosis, PatternRecognition) {
    let confidence = clamp_confidence(response.diagnosis.confidence);

    let diagnosis = Diagnosis {
        root_cause: response.diagnosis.root_cause.clone(),
        confidence,
        error_explanation: response.diagnosis.error_explanation.clone(),
        fix_steps: response.diagnosis.fix_steps.clone(),
        estimated_fix_time: response.diagnosis.estimated_fix_time.clone(),
        prevention: response.diagnosis.prevention.clone(),
    };

    let pattern = PatternRecognition {
        detected: true,
        patterns: vec![
            format!(
                "Status Code: {}",
                if response.result.is_error() {
                    "Error Detected"
                } else {
                    "Healthy"
                }
            ),
            format!("Response Time: {}ms", response.result.response_time),
            format!("Confidence: {}%", confidence),
        ],
    };

    (diagnosis, pattern)
}

fn clamp_confidence(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}
