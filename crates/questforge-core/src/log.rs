//! The adventure log, a bounded most-recent-first event feed

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum entries retained; the oldest entry is evicted past this
pub const MAX_LOG_ENTRIES: usize = 200;

/// What a log entry reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    /// Combat output (quest completion, focus session)
    Damage,
    /// Everything else (purchases, penalties, redemptions)
    Info,
}

/// One log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Allocated from the state-owned monotonic counter
    pub id: u64,
    pub message: String,
    pub kind: LogKind,
}

/// Bounded event log. Newest entries sit at the front; growth past
/// `MAX_LOG_ENTRIES` evicts from the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AdventureLog {
    entries: VecDeque<LogEntry>,
}

impl AdventureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, evicting the oldest if the log is full
    pub fn record(&mut self, id: u64, message: impl Into<String>, kind: LogKind) {
        self.entries.push_front(LogEntry {
            id,
            message: message.into(),
            kind,
        });
        self.entries.truncate(MAX_LOG_ENTRIES);
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
