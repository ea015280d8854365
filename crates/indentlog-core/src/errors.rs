use thiserror::Error;

/// Result type alias using IndentLogError
pub type Result<T> = std::result::Result<T, IndentLogError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match
/// on without depending on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentLogErrorKind {
    // Caller contract
    StackUnderflow,
    IndentationUnderflow,

    // Malformed input
    OddParameterCount,
}

impl IndentLogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            IndentLogErrorKind::StackUnderflow => "ERR_STACK_UNDERFLOW",
            IndentLogErrorKind::IndentationUnderflow => "ERR_INDENTATION_UNDERFLOW",
            IndentLogErrorKind::OddParameterCount => "ERR_ODD_PARAMETER_COUNT",
        }
    }
}

/// Errors raised by the indented logger
///
/// None of these are recoverable conditions inside the logger: they all
/// signal a caller bug (unbalanced start/end calls or a malformed flat
/// parameter list) and are surfaced immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndentLogError {
    /// An end-operation call had no matching start-operation call
    #[error("Operation stack underflow: end called with no open operation")]
    StackUnderflow,

    /// The indentation counter would have gone below zero
    #[error("Indentation underflow: decrement at depth 0")]
    IndentationUnderflow,

    /// A flat name/value parameter list had a dangling name
    #[error("Parameter list must hold name/value pairs, got {len} elements")]
    OddParameterCount { len: usize },
}

impl IndentLogError {
    /// Get the error kind
    pub fn kind(&self) -> IndentLogErrorKind {
        match self {
            IndentLogError::StackUnderflow => IndentLogErrorKind::StackUnderflow,
            IndentLogError::IndentationUnderflow => IndentLogErrorKind::IndentationUnderflow,
            IndentLogError::OddParameterCount { .. } => IndentLogErrorKind::OddParameterCount,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
