//! Indented logger facade
//!
//! An [`IndentedLogger`] tracks nested operations and renders every line at
//! the current nesting depth:
//!
//! ```
//! use std::sync::Arc;
//! use indentlog_core::{IndentedLogger, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut logger = IndentedLogger::new(sink.clone(), "app");
//!
//! logger.start_operation("REQ", "handle request");
//! logger.log_debug("DB", "connected");
//! logger.end_operation().unwrap();
//!
//! let lines = sink.texts();
//! assert_eq!(lines[0], "REQ - start handle request");
//! assert_eq!(lines[1], "  DB - connected");
//! assert!(lines[2].starts_with("REQ - end handle request {time (ms): \""));
//! ```
//!
//! # Debug gate
//!
//! Start and end calls query the sink's debug flag once and do nothing at
//! all when it is off: no record, no clock read, no stack or indentation
//! change. Flipping the flag between a start and its matching end
//! desynchronizes the stack; the end call then reports `StackUnderflow`.
//!
//! # Concurrency
//!
//! Methods that move the depth take `&mut self`, so one instance serves one
//! flow. Give each thread or task its own instance via [`IndentedLogger::derive`].

use std::error::Error;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use indentlog_core_types::schema::{END_PREFIX, START_PREFIX};
use indentlog_core_types::Level;

use crate::errors::{IndentLogError, Result};
use crate::indentation::Indentation;
use crate::operation::{Operation, OperationStack, StackEntry};
use crate::params::Params;
use crate::sink::LogSink;
use crate::static_log::{emit, throwable_params};

/// Logger rendering lines indented by the depth of open operations
pub struct IndentedLogger {
    sink: Arc<dyn LogSink>,
    indentation: Indentation,
    prefix: String,
    stack: OperationStack,
}

impl IndentedLogger {
    /// Create a logger with its own indentation counter starting at 0
    pub fn new(sink: Arc<dyn LogSink>, prefix: impl Into<String>) -> Self {
        Self::with_indentation(sink, Indentation::new(), prefix)
    }

    /// Create a logger on an existing counter
    ///
    /// Passing a clone of another logger's [`Indentation`] makes both render
    /// at one shared depth.
    pub fn with_indentation(
        sink: Arc<dyn LogSink>,
        indentation: Indentation,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            indentation,
            prefix: prefix.into(),
            stack: OperationStack::new(),
        }
    }

    /// Create a child logger starting at this logger's current depth
    ///
    /// The child gets the same sink and prefix, a copy of the depth value
    /// (not the shared counter) and an empty operation stack.
    pub fn derive(&self) -> Self {
        Self::with_indentation(
            Arc::clone(&self.sink),
            self.indentation.snapshot(),
            self.prefix.clone(),
        )
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.sink.is_debug_enabled()
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.indentation.get()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn indentation(&self) -> &Indentation {
        &self.indentation
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Number of operations and scopes started but not yet ended
    pub fn open_operations(&self) -> usize {
        self.stack.depth()
    }

    // ===== Operations =====

    /// Open a depth-only scope: nothing is logged, nested lines shift by one level
    pub fn start_scope(&mut self) {
        if self.sink.is_debug_enabled() {
            self.stack.push(StackEntry::Scoped);
            self.indentation.increment();
        }
    }

    /// Open a named, timed operation
    pub fn start_operation(&mut self, kind: &str, message: &str) {
        self.start_operation_with(kind, message, Params::new());
    }

    /// Open a named, timed operation whose start line carries parameters
    pub fn start_operation_with(&mut self, kind: &str, message: &str, params: Params) {
        let debug_enabled = self.sink.is_debug_enabled();
        if !debug_enabled {
            return;
        }
        self.stack
            .push(StackEntry::Timed(Operation::new(kind, message, debug_enabled)));
        self.emit(
            Level::Debug,
            kind,
            &format!("{}{}", START_PREFIX, message),
            &params,
        );
        self.indentation.increment();
    }

    /// Close the most recently opened operation or scope
    ///
    /// # Errors
    /// * `StackUnderflow` - If nothing is open
    /// * `IndentationUnderflow` - If a shared counter was already brought to 0 elsewhere
    pub fn end_operation(&mut self) -> Result<()> {
        self.end_operation_with(Params::new())
    }

    /// Close the most recently opened operation, appending parameters after the timing pair
    ///
    /// Neither error leaves a trace: the stack, the depth and the output are
    /// unchanged when an error is returned.
    ///
    /// # Errors
    /// * `StackUnderflow` - If nothing is open
    /// * `IndentationUnderflow` - If a shared counter was already brought to 0 elsewhere
    pub fn end_operation_with(&mut self, params: Params) -> Result<()> {
        if !self.sink.is_debug_enabled() {
            return Ok(());
        }
        if self.stack.is_empty() {
            return Err(IndentLogError::StackUnderflow);
        }
        self.indentation.decrement()?;
        let entry = self.stack.pop()?;

        if let StackEntry::Timed(operation) = entry {
            let params = params.with_timing(operation.elapsed_ms());
            self.emit(
                Level::Debug,
                operation.kind(),
                &format!("{}{}", END_PREFIX, operation.message()),
                &params,
            );
        }
        Ok(())
    }

    /// Open a named operation that ends when the returned guard is dropped
    pub fn operation(&mut self, kind: &str, message: &str) -> OperationScope<'_> {
        self.operation_with(kind, message, Params::new())
    }

    /// Guard form of [`start_operation_with`](Self::start_operation_with)
    pub fn operation_with(
        &mut self,
        kind: &str,
        message: &str,
        params: Params,
    ) -> OperationScope<'_> {
        let open = self.open_operations();
        self.start_operation_with(kind, message, params);
        OperationScope::new(self, open)
    }

    /// Open a depth-only scope that ends when the returned guard is dropped
    pub fn scope(&mut self) -> OperationScope<'_> {
        let open = self.open_operations();
        self.start_scope();
        OperationScope::new(self, open)
    }

    // ===== Direct logging =====

    pub fn log_debug(&self, kind: &str, message: &str) {
        self.log_debug_with(kind, message, Params::new());
    }

    /// Log a debug line at the current depth; skipped when debug is disabled
    pub fn log_debug_with(&self, kind: &str, message: &str, params: Params) {
        if self.sink.is_debug_enabled() {
            self.emit(Level::Debug, kind, message, &params);
        }
    }

    pub fn log_warning(&self, kind: &str, message: &str) {
        self.log_warning_with(kind, message, Params::new());
    }

    pub fn log_warning_with(&self, kind: &str, message: &str, params: Params) {
        self.emit(Level::Warning, kind, message, &params);
    }

    /// Log a warning whose parameter block is the rendered error chain
    pub fn log_warning_error(
        &self,
        kind: &str,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.emit(Level::Warning, kind, message, &throwable_params(error));
    }

    pub fn log_error(&self, kind: &str, message: &str) {
        self.log_error_with(kind, message, Params::new());
    }

    pub fn log_error_with(&self, kind: &str, message: &str, params: Params) {
        self.emit(Level::Error, kind, message, &params);
    }

    /// Log an error whose parameter block is the rendered error chain
    pub fn log_error_error(
        &self,
        kind: &str,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.emit(Level::Error, kind, message, &throwable_params(error));
    }

    fn emit(&self, level: Level, kind: &str, message: &str, params: &Params) {
        emit(
            self.sink.as_ref(),
            level,
            self.indentation.get(),
            &self.prefix,
            kind,
            message,
            params,
        );
    }
}

impl std::fmt::Debug for IndentedLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndentedLogger")
            .field("prefix", &self.prefix)
            .field("depth", &self.indentation.get())
            .field("open_operations", &self.stack.depth())
            .finish()
    }
}

/// Guard ending an operation or scope when dropped
///
/// Dereferences to the logger so nested calls go through the guard.
/// A guard opened while debug was disabled never pushed anything, and so
/// never ends anything either, whatever the flag says by then.
pub struct OperationScope<'a> {
    logger: &'a mut IndentedLogger,
    pushed: bool,
    ended: bool,
}

impl<'a> OperationScope<'a> {
    fn new(logger: &'a mut IndentedLogger, open_before: usize) -> Self {
        let pushed = logger.open_operations() > open_before;
        Self {
            logger,
            pushed,
            ended: false,
        }
    }

    /// End now, surfacing any error
    ///
    /// # Errors
    /// See [`IndentedLogger::end_operation`]
    pub fn end(self) -> Result<()> {
        self.end_with(Params::new())
    }

    /// End now with extra parameters after the timing pair
    ///
    /// # Errors
    /// See [`IndentedLogger::end_operation_with`]
    pub fn end_with(mut self, params: Params) -> Result<()> {
        self.ended = true;
        if !self.pushed {
            return Ok(());
        }
        self.logger.end_operation_with(params)
    }
}

impl Deref for OperationScope<'_> {
    type Target = IndentedLogger;

    fn deref(&self) -> &IndentedLogger {
        self.logger
    }
}

impl DerefMut for OperationScope<'_> {
    fn deref_mut(&mut self) -> &mut IndentedLogger {
        self.logger
    }
}

impl Drop for OperationScope<'_> {
    fn drop(&mut self) {
        if self.pushed && !self.ended {
            // The guard's own entry is on top, so the end cannot underflow
            let _ = self.logger.end_operation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IndentLogError;
    use crate::params;
    use crate::sink::MemorySink;

    fn logger() -> (Arc<MemorySink>, IndentedLogger) {
        let sink = Arc::new(MemorySink::new());
        let logger = IndentedLogger::new(sink.clone(), "test");
        (sink, logger)
    }

    #[test]
    fn test_start_logs_at_pre_increment_depth() {
        let (sink, mut logger) = logger();
        logger.start_operation("REQ", "handle");
        assert_eq!(logger.depth(), 1);
        assert_eq!(sink.texts(), vec!["REQ - start handle".to_string()]);
    }

    #[test]
    fn test_start_with_params() {
        let (sink, mut logger) = logger();
        logger.start_operation_with("REQ", "handle", params!["path" => "/x"]);
        sink.assert_line_exists("REQ - start handle {path: \"/x\"}");
    }

    #[test]
    fn test_end_timing_pair_comes_first() {
        let (sink, mut logger) = logger();
        logger.start_operation("DB", "query");
        logger.end_operation_with(params!["rows" => 2u64]).unwrap();

        let end = &sink.texts()[1];
        assert!(end.starts_with("DB - end query {time (ms): \""));
        assert!(end.ends_with("\", rows: \"2\"}"));
    }

    #[test]
    fn test_scope_logs_nothing_but_indents() {
        let (sink, mut logger) = logger();
        logger.start_scope();
        logger.log_debug("X", "inside");
        logger.end_operation().unwrap();
        logger.log_debug("X", "outside");

        assert_eq!(
            sink.texts(),
            vec!["  X - inside".to_string(), "X - outside".to_string()]
        );
    }

    #[test]
    fn test_end_without_start_underflows() {
        let (sink, mut logger) = logger();
        assert_eq!(logger.end_operation(), Err(IndentLogError::StackUnderflow));
        assert_eq!(logger.depth(), 0);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_indentation_underflow_leaves_operation_open() {
        let sink = Arc::new(MemorySink::new());
        let shared = Indentation::new();
        let mut logger = IndentedLogger::with_indentation(sink.clone(), shared.clone(), "test");

        logger.start_operation("REQ", "handle");
        shared.decrement().unwrap();

        assert_eq!(
            logger.end_operation(),
            Err(IndentLogError::IndentationUnderflow)
        );
        assert_eq!(logger.open_operations(), 1);
        assert_eq!(logger.depth(), 0);
        assert_eq!(sink.texts(), vec!["REQ - start handle".to_string()]);

        // Once the depth is restored the same record closes normally
        shared.increment();
        logger.end_operation().unwrap();
        assert_eq!(logger.open_operations(), 0);
        assert!(sink.texts()[1].starts_with("REQ - end handle {time (ms): \""));
    }

    #[test]
    fn test_started_operation_is_timed() {
        let (_sink, mut logger) = logger();
        logger.start_operation("REQ", "handle");
        match logger.stack.peek() {
            Some(StackEntry::Timed(operation)) => assert!(operation.is_timed()),
            other => panic!("expected timed entry, got {:?}", other),
        }
    }

    #[test]
    fn test_guard_opened_while_disabled_leaves_outer_open() {
        let sink = Arc::new(MemorySink::new());
        let mut logger = IndentedLogger::new(sink.clone(), "test");
        logger.start_operation("OUTER", "work");

        sink.set_debug_enabled(false);
        {
            let _inner = logger.operation("INNER", "skipped");
            sink.set_debug_enabled(true);
        }
        assert_eq!(logger.open_operations(), 1);
        assert_eq!(logger.depth(), 1);

        let inner = logger.scope();
        sink.set_debug_enabled(false);
        sink.set_debug_enabled(true);
        inner.end().unwrap();
        assert_eq!(logger.open_operations(), 1);

        sink.set_debug_enabled(false);
        let skipped = logger.operation("INNER", "skipped");
        sink.set_debug_enabled(true);
        skipped.end_with(params!["status" => "ok"]).unwrap();
        assert_eq!(logger.open_operations(), 1);

        logger.end_operation().unwrap();
        assert_eq!(logger.open_operations(), 0);
        assert_eq!(sink.texts().len(), 2);
    }

    #[test]
    fn test_disabled_gate_is_inert() {
        let sink = Arc::new(MemorySink::with_debug(false));
        let mut logger = IndentedLogger::new(sink.clone(), "test");

        logger.start_operation("REQ", "handle");
        logger.start_scope();
        assert_eq!(logger.depth(), 0);
        assert_eq!(logger.open_operations(), 0);
        logger.end_operation().unwrap();
        logger.end_operation().unwrap();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_gate_checked_once_per_call() {
        let (sink, mut logger) = logger();
        logger.start_operation("REQ", "handle");
        logger.end_operation().unwrap();
        assert_eq!(sink.debug_checks(), 2);
    }

    #[test]
    fn test_guard_ends_on_drop() {
        let (sink, mut logger) = logger();
        {
            let mut op = logger.operation("REQ", "handle");
            op.log_debug("STEP", "work");
            assert_eq!(op.depth(), 1);
        }
        assert_eq!(logger.depth(), 0);
        assert_eq!(logger.open_operations(), 0);

        let lines = sink.texts();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  STEP - work");
        assert!(lines[2].starts_with("REQ - end handle"));
    }

    #[test]
    fn test_guard_end_with_params() {
        let (sink, mut logger) = logger();
        let op = logger.operation("REQ", "handle");
        op.end_with(params!["status" => "ok"]).unwrap();
        assert_eq!(logger.depth(), 0);
        assert!(sink.texts()[1].ends_with("status: \"ok\"}"));
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_debug_impl_shows_depth() {
        let (_sink, mut logger) = logger();
        logger.start_scope();
        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("depth: 1"));
        assert!(rendered.contains("prefix: \"test\""));
    }
}
