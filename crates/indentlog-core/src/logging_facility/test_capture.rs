//! Test capture mode for deterministic logging assertions
//!
//! This module provides a subscriber layer that records every tracing event
//! in memory, so tests can assert on the lines a [`TracingSink`] produced.
//!
//! [`TracingSink`]: crate::sink::TracingSink

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use indentlog_core_types::schema::{FIELD_COMPONENT, FIELD_MESSAGE};

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub message: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer collecting every event into a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        let capture = TestCapture { events };
        (layer, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: visitor.fields.get(FIELD_COMPONENT).cloned(),
            message: visitor.fields.get(FIELD_MESSAGE).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Rendered lines emitted under the given component, in order
    pub fn lines(&self, component: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.component.as_deref() == Some(component))
            .filter_map(|e| e.message)
            .collect()
    }

    /// Assert that a line with exactly this text was emitted under the component
    ///
    /// # Panics
    ///
    /// Panics if the line is not found
    pub fn assert_line_exists(&self, component: &str, line: &str) {
        let lines = self.lines(component);
        assert!(
            lines.iter().any(|l| l == line),
            "Expected line {:?} for component={} not found in {} captured lines",
            line,
            component,
            lines.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first use and
/// returns the shared capture handle. Tests running in parallel share the
/// buffer, so filter by a component name unique to the test.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use indentlog_core::logging_facility::test_capture::init_test_capture;
/// use indentlog_core::{IndentedLogger, TracingSink};
///
/// let capture = init_test_capture();
/// let logger = IndentedLogger::new(Arc::new(TracingSink::new()), "doc_example");
/// logger.log_warning("CFG", "missing key");
/// capture.assert_line_exists("doc_example", "CFG - missing key");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
