//! Vigil core data models.
//!
//! This crate defines the data structures shared by the dashboard
//! orchestration layer: system status, diagnosis results, the bounded
//! live-log buffer and the monitored-site registry.

#![warn(missing_docs)]

// Status and metrics
mod metric;
mod status;

// Diagnosis results
mod diagnosis;

// Live log stream
mod log;

// Monitored sites
mod site;

// Re-exports
pub use diagnosis::{Diagnosis, PatternRecognition};
pub use log::{LogEntry, LogStreamBuffer, LOG_CAPACITY};
pub use metric::MttrMetric;
pub use site::{MonitoredSite, MonitoredSiteRegistry};
pub use status::SystemStatus;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
