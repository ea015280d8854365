//! Shared nesting depth counter
//!
//! An `Indentation` is a small handle onto a depth counter. Cloning the
//! handle shares the counter, which lets a parent logger and a cooperating
//! logger render at one common depth. `snapshot()` copies the current value
//! into a fresh counter instead, which is what logger derivation uses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::{IndentLogError, Result};

/// Current nesting depth, shared by every clone of the handle
#[derive(Debug, Clone, Default)]
pub struct Indentation(Arc<AtomicUsize>);

impl Indentation {
    /// Create a counter starting at depth 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter starting at the given depth
    pub fn at(depth: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(depth)))
    }

    /// Current depth
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    /// Overwrite the current depth
    pub fn set(&self, depth: usize) {
        self.0.store(depth, Ordering::Relaxed);
    }

    /// Increase the depth by one
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrease the depth by one
    ///
    /// # Errors
    /// * `IndentationUnderflow` - If the depth is already 0; the counter is left unchanged
    pub fn decrement(&self) -> Result<()> {
        self.0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |d| d.checked_sub(1))
            .map(|_| ())
            .map_err(|_| IndentLogError::IndentationUnderflow)
    }

    /// Copy the current depth into a new, unshared counter
    pub fn snapshot(&self) -> Self {
        Self::at(self.get())
    }

    /// Whether two handles point at the same counter
    pub fn shares_with(&self, other: &Indentation) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
