//! Log sinks.

use std::sync::{Arc, Mutex};

use crate::logging::LogLevel;

/// Destination for formatted log lines.
pub trait LogSink: Send + Sync {
    /// Write one formatted line.
    fn write(&self, level: LogLevel, line: &str);
}

/// Writes every line to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps lines in memory, for tests and for replaying recent activity.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    /// Snapshot of the recorded lines with their levels.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }
}
