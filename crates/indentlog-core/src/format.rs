//! Line rendering
//!
//! Rendered lines have the shape
//! `<2*depth spaces><kind> - <message>[ {<k1>: "<v1>", <k2>: "<v2>"}]`.
//! Everything here is pure; emitting the line is the sink's job.

use std::error::Error;
use std::fmt::Write;

use indentlog_core_types::schema::{INDENT_UNIT, KIND_SEPARATOR};

use crate::params::Params;

/// Leading whitespace for the given depth
pub fn indent_spaces(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Render the trailing parameter block, or an empty string if no pair is complete
pub fn render_params(params: &Params) -> String {
    let mut block = String::new();
    for (name, value) in params.complete_pairs() {
        block.push_str(if block.is_empty() { " {" } else { ", " });
        // Writing into a String cannot fail
        let _ = write!(block, "{}: \"{}\"", name, value);
    }
    if !block.is_empty() {
        block.push('}');
    }
    block
}

/// Render one complete log line
pub fn render_line(depth: usize, kind: &str, message: &str, params: &Params) -> String {
    format!(
        "{}{}{}{}{}",
        indent_spaces(depth),
        kind,
        KIND_SEPARATOR,
        message,
        render_params(params)
    )
}

/// Render an error and its source chain as `outer: cause: root`
///
/// An absent error renders as the empty string.
pub fn error_to_string(error: Option<&(dyn Error + 'static)>) -> String {
    let mut rendered = String::new();
    let mut current = error;
    while let Some(err) = current {
        if !rendered.is_empty() {
            rendered.push_str(": ");
        }
        let _ = write!(rendered, "{}", err);
        current = err.source();
    }
    rendered
}
