//! Severity levels understood by indented log sinks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a rendered log line
///
/// The taxonomy is deliberately small: there is no info or fatal level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Warning,
    Error,
}

impl Level {
    /// Get the stable lowercase name of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
