//! Adventure journal
//!
//! Narration shown to the player. Append-only and never truncated.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Normal,
    Location,
    Combat,
    Item,
}

/// A message in the adventure log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub category: LogCategory,
}

impl LogEntry {
    /// Wall-clock time as `HH:MM:SS`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Ordered log of everything that happened this session
#[derive(Debug, Clone, Default)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, category: LogCategory) {
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            category,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries appended after the first `count`
    pub fn since(&self, count: usize) -> &[LogEntry] {
        self.entries.get(count..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
