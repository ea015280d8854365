//! Logging without an owning logger instance
//!
//! These functions take the sink and prefix explicitly and always render
//! at depth 0. They share the rendering path with [`IndentedLogger`].
//!
//! [`IndentedLogger`]: crate::logger::IndentedLogger

use std::error::Error;

use indentlog_core_types::schema::PARAM_THROWABLE;
use indentlog_core_types::Level;

use crate::format::{error_to_string, render_line};
use crate::params::Params;
use crate::sink::LogSink;

/// Render a line and hand it to the sink
pub(crate) fn emit(
    sink: &dyn LogSink,
    level: Level,
    depth: usize,
    prefix: &str,
    kind: &str,
    message: &str,
    params: &Params,
) {
    sink.log(level, prefix, &render_line(depth, kind, message, params));
}

/// Parameter list carrying a single `throwable` pair
pub(crate) fn throwable_params(error: Option<&(dyn Error + 'static)>) -> Params {
    Params::pair(PARAM_THROWABLE, error_to_string(error))
}

/// Log a debug line at depth 0; skipped entirely when debug is disabled
pub fn log_debug(sink: &dyn LogSink, prefix: &str, kind: &str, message: &str, params: Params) {
    if sink.is_debug_enabled() {
        emit(sink, Level::Debug, 0, prefix, kind, message, &params);
    }
}

/// Log a warning line at depth 0
pub fn log_warning(sink: &dyn LogSink, prefix: &str, kind: &str, message: &str, params: Params) {
    emit(sink, Level::Warning, 0, prefix, kind, message, &params);
}

/// Log a warning line at depth 0 carrying an error chain
pub fn log_warning_error(
    sink: &dyn LogSink,
    prefix: &str,
    kind: &str,
    message: &str,
    error: Option<&(dyn Error + 'static)>,
) {
    emit(
        sink,
        Level::Warning,
        0,
        prefix,
        kind,
        message,
        &throwable_params(error),
    );
}

/// Log an error line at depth 0
pub fn log_error(sink: &dyn LogSink, prefix: &str, kind: &str, message: &str, params: Params) {
    emit(sink, Level::Error, 0, prefix, kind, message, &params);
}

/// Log an error line at depth 0 carrying an error chain
pub fn log_error_error(
    sink: &dyn LogSink,
    prefix: &str,
    kind: &str,
    message: &str,
    error: Option<&(dyn Error + 'static)>,
) {
    emit(
        sink,
        Level::Error,
        0,
        prefix,
        kind,
        message,
        &throwable_params(error),
    );
}
