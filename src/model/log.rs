//! Migration log entries.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Warning,
    Error,
    Success,
}

impl LogKind {
    /// Short prefix shown in front of the message (errors only).
    pub fn prefix(&self) -> &'static str {
        match self {
            LogKind::Error => "[ERR] ",
            _ => "",
        }
    }
}

/// A single line of the migration log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    /// Wall-clock time, `HH:MM:SS` (24-hour).
    pub timestamp: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

/// Lines present before any connection is made.
const STARTUP_LINES: &[(&str, &str)] = &[
    ("10:00:01", "System initialization started..."),
    ("10:00:02", "Loading drivers: pg-native, mongodb-core, aws-sdk"),
    ("10:00:03", "Waiting for connection..."),
];

/// Append-only log with monotonically increasing ids.
///
/// Ids keep increasing across [`EventLog::clear`], so an id is never reused
/// within one process.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a log pre-filled with the start-up lines.
    pub fn with_startup_lines() -> Self {
        let mut log = Self::new();
        for (timestamp, message) in STARTUP_LINES {
            let id = log.take_id();
            log.entries.push(LogEntry {
                id,
                timestamp: (*timestamp).to_string(),
                message: (*message).to_string(),
                kind: LogKind::Info,
            });
        }
        log
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a line stamped with the current local time.
    pub fn push(&mut self, message: impl Into<String>, kind: LogKind) -> &LogEntry {
        self.push_at(message, kind, Local::now())
    }

    /// Appends a line stamped with the given time.
    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        kind: LogKind,
        at: DateTime<Local>,
    ) -> &LogEntry {
        let id = self.take_id();
        self.entries.push(LogEntry {
            id,
            timestamp: at.format("%H:%M:%S").to_string(),
            message: message.into(),
            kind,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Removes every entry. Ids are not reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries appended after the one with `id` (all entries if `id` is unknown or cleared).
    pub fn since(&self, id: u64) -> &[LogEntry] {
        let start = self.entries.partition_point(|e| e.id <= id);
        &self.entries[start..]
    }

    /// Id of the newest entry, or 0 when empty.
    pub fn last_id(&self) -> u64 {
        self.entries.last().map(|e| e.id).unwrap_or(0)
    }
}
