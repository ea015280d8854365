//! Canonical schema constants for indented log lines
//!
//! These constants keep rendered lines and structured fields consistent
//! between the logger, its sinks and tests.

// Line rendering
pub const INDENT_UNIT: &str = "  ";
pub const KIND_SEPARATOR: &str = " - ";
pub const START_PREFIX: &str = "start ";
pub const END_PREFIX: &str = "end ";

// Canonical parameter names
pub const PARAM_TIME_MS: &str = "time (ms)";
pub const PARAM_THROWABLE: &str = "throwable";

// Canonical field keys for structured sinks
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_MESSAGE: &str = "message";
