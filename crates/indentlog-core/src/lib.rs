//! indentlog Core - Hierarchical, debug-gated logging helper
//!
//! This crate adds structure on top of an existing leveled logger:
//! - Nested start/end operations tracked on a per-logger stack
//! - Depth-proportional indentation shared or copied between loggers
//! - Elapsed time appended to every operation's end line
//! - Ordered `{name: "value"}` parameter blocks with absent pairs dropped
//! - A `tracing` backed sink and an in-memory sink
//!
//! All operation tracking is skipped when the sink reports debug output
//! as disabled.

pub mod errors;
pub mod format;
pub mod indentation;
pub mod logger;
pub mod logging_facility;
pub mod operation;
pub mod params;
pub mod sink;
pub mod static_log;

// Re-export commonly used types
pub use errors::{IndentLogError, IndentLogErrorKind, Result};
pub use indentation::Indentation;
pub use indentlog_core_types::Level;
pub use logger::{IndentedLogger, OperationScope};
pub use operation::{Operation, OperationStack, StackEntry};
pub use params::{IntoParam, Params};
pub use sink::{CapturedLine, LogSink, MemorySink, TracingSink};
