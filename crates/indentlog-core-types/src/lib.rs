//! Core types shared across indentlog crates
//!
//! This crate provides the foundational types used by the indented logger
//! and by sink implementations:
//!
//! - **Level**: the three-level severity taxonomy (debug, warning, error)
//! - **Schema constants**: indentation unit, message prefixes and
//!   canonical parameter/field names

pub mod level;
pub mod schema;

pub use level::Level;
