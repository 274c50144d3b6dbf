//! Diagnosis results produced from a check or auto-heal response.

use serde::{Deserialize, Serialize};

/// A root-cause diagnosis for the most recent check.
///
/// Replaced wholesale on each successful check; never merged
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Short root-cause statement
    pub root_cause: String,

    /// Backend confidence in the diagnosis, 0-100
    pub confidence: u8,

    /// Longer explanation of why the failure happened, when available
    pub error_explanation: Option<String>,

    /// Recommended fixes, in order
    pub fix_steps: Vec<String>,

    /// Human-readable fix time estimate, e.g. "5 minutes"
    pub estimated_fix_time: String,

    /// Preventive measures for the future, possibly empty
    pub prevention: Vec<String>,
}

/// Derived pattern-recognition summary for the most recent check.
///
/// A stateless view recomputed on every successful check and discarded
/// at the start of every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecognition {
    /// Whether pattern analysis ran for the current check
    pub detected: bool,

    /// Display lines, in fixed order
    pub patterns: Vec<String>,
}
