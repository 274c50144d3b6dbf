//! Registry of sites under continuous monitoring.

use serde::{Deserialize, Serialize};

/// A site registered for continuous monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredSite {
    /// The monitored URL
    pub url: String,

    /// Always true; no deactivation path exists
    pub active: bool,
}

/// In-memory set of monitored sites, keyed by exact string equality on
/// the URL. Insertion order is preserved for display. Sites persist
/// for the session; there is no removal operation.
#[derive(Debug, Clone, Default)]
pub struct MonitoredSiteRegistry {
    sites: Vec<MonitoredSite>,
}

impl MonitoredSiteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a URL if no entry with an identical string exists.
    /// Returns true if the site was inserted.
    pub fn add_if_absent(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.sites.iter().any(|s| s.url == url) {
            return false;
        }
        self.sites.push(MonitoredSite { url, active: true });
        true
    }

    /// Whether the URL is already registered.
    pub fn contains(&self, url: &str) -> bool {
        self.sites.iter().any(|s| s.url == url)
    }

    /// Number of registered sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Registered sites in insertion order.
    pub fn sites(&self) -> impl Iterator<Item = &MonitoredSite> {
        self.sites.iter()
    }
}
