//! Bounded live-log stream buffer.

use crate::Time;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of log lines retained by [`LogStreamBuffer`].
pub const LOG_CAPACITY: usize = 200;

/// One line received over the push channel. The line is opaque;
/// ordering is arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The raw log line
    pub line: String,

    /// When the line arrived at the client
    pub received_at: Time,
}

/// Ordered, bounded buffer of live log lines.
///
/// Appending beyond capacity evicts the oldest entry first, so the
/// buffer always holds at most the most recent [`LOG_CAPACITY`] lines.
/// The bound is structural: no caller can grow the buffer past it.
#[derive(Debug, Clone, Default)]
pub struct LogStreamBuffer {
    entries: VecDeque<LogEntry>,
    appended: u64,
}

impl LogStreamBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
            appended: 0,
        }
    }

    /// Empty the buffer. Called at the start of every check, inject
    /// and auto-heal action.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Append one line, evicting the oldest entry first if the buffer
    /// is at capacity.
    pub fn append(&mut self, line: impl Into<String>) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            line: line.into(),
            received_at: chrono::Utc::now(),
        });
        self.appended += 1;
    }

    /// Number of lines currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the most recently appended line, counted over the
    /// whole session (monotonic across evictions and resets). A view
    /// can watch this to react to growth.
    pub fn latest_index(&self) -> Option<u64> {
        self.appended.checked_sub(1)
    }

    /// Entries in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Lines in arrival order, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.line.as_str())
    }
}
