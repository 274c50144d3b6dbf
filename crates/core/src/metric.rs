//! Client-side round-trip latency metric.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Elapsed wall-clock time between dispatching the most recent check
/// or auto-heal action and its response arriving.
///
/// Despite the name this is purely client round-trip latency, not a
/// measurement of true repair time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MttrMetric {
    seconds: f64,
}

impl MttrMetric {
    /// Build from the elapsed duration of an action.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self {
            seconds: elapsed.as_secs_f64(),
        }
    }

    /// Elapsed seconds.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }
}

impl fmt::Display for MttrMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s", self.seconds)
    }
}
