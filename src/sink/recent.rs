//! In-memory buffer of recent log entries.
//!
//! Keeps the newest entries first and caps the buffer at `RECENT_LOG_CAPACITY`, so the
//! `logs` command can show what happened recently without any persistent storage.

use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use crate::model::log::{LogEntry, LogLevel};

/// Maximum number of entries retained.
pub const RECENT_LOG_CAPACITY: usize = 100;

#[derive(Clone)]
pub struct RecentLogs {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl RecentLogs {
    pub fn new() -> Self {
        Self::with_capacity(RECENT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Adds an entry at the front, dropping the oldest once the buffer is full.
    pub fn push(&self, level: LogLevel, message: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        entries.push_front(LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        });
        entries.truncate(self.capacity);
    }

    /// Returns up to `limit` entries, newest first.
    pub fn latest(&self, limit: usize) -> Vec<LogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for RecentLogs {
    fn default() -> Self {
        Self::new()
    }
}
