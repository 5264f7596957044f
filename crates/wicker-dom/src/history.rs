//! Session history
//!
//! In-memory fragment history for the page hosting the document. Tab
//! selection rewrites the current entry instead of pushing a new one, so
//! stepping through tabs never pollutes the back stack.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Fragment (or path) recorded for the entry
    pub fragment: String,
    /// Last time the entry was written
    pub visited_at: DateTime<Utc>,
}

/// Session history; always holds at least the initial entry.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    current: usize,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry {
                fragment: String::new(),
                visited_at: Utc::now(),
            }],
            current: 0,
        }
    }

    /// Overwrite the current entry without growing the stack.
    pub fn replace(&mut self, fragment: &str) {
        tracing::debug!(fragment = %fragment, "History replace");

        self.entries[self.current] = HistoryEntry {
            fragment: fragment.to_string(),
            visited_at: Utc::now(),
        };
    }

    /// Append a new entry and make it current.
    pub fn push(&mut self, fragment: &str) {
        tracing::debug!(fragment = %fragment, "History push");

        self.entries.truncate(self.current + 1);
        self.entries.push(HistoryEntry {
            fragment: fragment.to_string(),
            visited_at: Utc::now(),
        });
        self.current = self.entries.len() - 1;
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}
