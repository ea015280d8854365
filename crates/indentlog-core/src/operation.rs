//! Operation records and the operation stack

use std::time::Instant;

use crate::errors::{IndentLogError, Result};

/// A named unit of work opened by a start-operation call
///
/// `started` is `None` when the operation was built with timing disabled;
/// elapsed time is then reported as absent rather than as a bogus value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    kind: String,
    message: String,
    started: Option<Instant>,
}

impl Operation {
    /// Create an operation, reading the clock only when `timed` is set
    pub fn new(kind: impl Into<String>, message: impl Into<String>, timed: bool) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            started: timed.then(Instant::now),
        }
    }

    /// Type tag rendered before the message
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a start time was captured
    pub fn is_timed(&self) -> bool {
        self.started.is_some()
    }

    /// Milliseconds since the operation started, if it was timed
    pub fn elapsed_ms(&self) -> Option<u64> {
        self.started
            .map(|start| u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX))
    }
}

/// One level of the operation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEntry {
    /// Depth-only scope; nothing is logged at its start or end
    Scoped,
    /// Named operation whose end line carries the elapsed time
    Timed(Operation),
}

/// LIFO stack of open operations
#[derive(Debug, Clone, Default)]
pub struct OperationStack {
    entries: Vec<StackEntry>,
}

impl OperationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: StackEntry) {
        self.entries.push(entry);
    }

    /// Remove the most recently opened entry
    ///
    /// # Errors
    /// * `StackUnderflow` - If no operation is open
    pub fn pop(&mut self) -> Result<StackEntry> {
        self.entries.pop().ok_or(IndentLogError::StackUnderflow)
    }

    pub fn peek(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    /// Number of open entries
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
