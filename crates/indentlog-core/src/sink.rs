//! Sinks receiving rendered lines
//!
//! A sink is the leveled logger underneath an [`IndentedLogger`]. It only
//! has to answer whether debug output is enabled and accept one rendered
//! line at a time; routing, filtering and persistence stay on its side.
//!
//! [`IndentedLogger`]: crate::logger::IndentedLogger

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use indentlog_core_types::Level;

/// Leveled destination for rendered lines
pub trait LogSink: Send + Sync {
    /// Whether debug-level lines would be kept
    fn is_debug_enabled(&self) -> bool;

    /// Emit one rendered line; `prefix` identifies the owning logger
    fn log(&self, level: Level, prefix: &str, line: &str);
}

/// Sink forwarding every line to the active `tracing` subscriber
///
/// The logger prefix is attached as the `component` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn is_debug_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }

    fn log(&self, level: Level, prefix: &str, line: &str) {
        match level {
            Level::Debug => tracing::debug!(component = prefix, "{}", line),
            Level::Warning => tracing::warn!(component = prefix, "{}", line),
            Level::Error => tracing::error!(component = prefix, "{}", line),
        }
    }
}

/// A line received by a [`MemorySink`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: Level,
    pub prefix: String,
    pub line: String,
}

/// In-memory sink with a switchable debug flag
///
/// Debug lines are dropped while the flag is off, matching what a leveled
/// backend would do.
#[derive(Debug)]
pub struct MemorySink {
    debug_enabled: AtomicBool,
    debug_checks: AtomicUsize,
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemorySink {
    /// Create a sink with debug output enabled
    pub fn new() -> Self {
        Self::with_debug(true)
    }

    pub fn with_debug(enabled: bool) -> Self {
        Self {
            debug_enabled: AtomicBool::new(enabled),
            debug_checks: AtomicUsize::new(0),
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn set_debug_enabled(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Relaxed);
    }

    /// How many times `is_debug_enabled` has been queried
    pub fn debug_checks(&self) -> usize {
        self.debug_checks.load(Ordering::Relaxed)
    }

    /// Get all captured lines
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Get the text of all captured lines
    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.line).collect()
    }

    /// Clear all captured lines
    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }

    /// Count lines matching a predicate
    pub fn count_lines<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedLine) -> bool,
    {
        self.lines().iter().filter(|l| predicate(l)).count()
    }

    /// Assert that a line with exactly this text was captured
    ///
    /// # Panics
    ///
    /// Panics if no such line exists
    pub fn assert_line_exists(&self, text: &str) {
        let lines = self.texts();
        assert!(
            lines.iter().any(|l| l == text),
            "Expected line {:?} not found in {} captured lines: {:#?}",
            text,
            lines.len(),
            lines
        );
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MemorySink {
    fn is_debug_enabled(&self) -> bool {
        self.debug_checks.fetch_add(1, Ordering::Relaxed);
        self.debug_enabled.load(Ordering::Relaxed)
    }

    fn log(&self, level: Level, prefix: &str, line: &str) {
        if level == Level::Debug && !self.debug_enabled.load(Ordering::Relaxed) {
            return;
        }
        let captured = CapturedLine {
            level,
            prefix: prefix.to_string(),
            line: line.to_string(),
        };
        self.lines.lock().map(|mut l| l.push(captured)).ok();
    }
}
