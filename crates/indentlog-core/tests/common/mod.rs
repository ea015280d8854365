use std::sync::Arc;

use indentlog_core::{IndentedLogger, MemorySink};

/// Create a logger on a fresh in-memory sink with debug enabled
#[allow(dead_code)]
pub fn new_logger(prefix: &str) -> (Arc<MemorySink>, IndentedLogger) {
    let sink = Arc::new(MemorySink::new());
    let logger = IndentedLogger::new(sink.clone(), prefix);
    (sink, logger)
}

/// Depth a rendered line was emitted at
#[allow(dead_code)]
pub fn depth_of(line: &str) -> usize {
    (line.len() - line.trim_start_matches(' ').len()) / 2
}

/// Value of the `time (ms)` pair on an end line
#[allow(dead_code)]
pub fn elapsed_of(line: &str) -> u64 {
    let start = line
        .find("time (ms): \"")
        .map(|i| i + "time (ms): \"".len())
        .expect("line has no timing pair");
    let len = line[start..].find('"').expect("unterminated timing value");
    line[start..start + len]
        .parse()
        .expect("timing value is not a number")
}
