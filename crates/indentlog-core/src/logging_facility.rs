//! Tracing backend bootstrap for indented loggers
//!
//! This module wires [`TracingSink`](crate::sink::TracingSink) output into
//! `tracing-subscriber`:
//! - Single initialization point via `init(profile)`
//! - Test capture mode for asserting on rendered lines
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use indentlog_core::logging_facility::{init, Profile};
//! use indentlog_core::{IndentedLogger, TracingSink};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//!
//! let mut logger = IndentedLogger::new(Arc::new(TracingSink::new()), "app");
//! logger.start_operation("REQ", "handle request");
//! logger.end_operation().unwrap();
//! ```

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
