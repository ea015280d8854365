//! Logging initialization module
//!
//! Provides a single initialization point for the tracing backend.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug lines enabled
    Development,
    /// JSON structured output, debug lines (and so operation tracking) disabled
    Production,
    /// Bare registry; use `init_test_capture()` to record events
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "indentlog_core=debug",
            Profile::Production => "indentlog_core=info",
            Profile::Test => "",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup. Later calls are no-ops, and so is
/// any call made after another global subscriber has been installed.
///
/// # Profiles
///
/// - **Development**: Human-readable lines, `indentlog_core=debug`
/// - **Production**: JSON lines, `indentlog_core=info`
/// - **Test**: Registry only
///
/// `RUST_LOG` overrides the profile's default filter.
///
/// # Example
///
/// ```
/// use indentlog_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
        };
        // try_init: a subscriber installed by the host application wins
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter())
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter())
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Development);
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }

    #[test]
    fn test_default_filters() {
        assert_eq!(Profile::Development.default_filter(), "indentlog_core=debug");
        assert_eq!(Profile::Production.default_filter(), "indentlog_core=info");
    }
}
