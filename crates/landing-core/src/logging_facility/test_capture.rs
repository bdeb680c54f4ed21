//! Test capture mode for deterministic logging assertions
//!
//! A process-wide layer that records every event in memory. Tests filter by
//! a unique `op` name, so parallel tests sharing the capture do not interfere.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer collecting events into a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
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
            component: visitor.fields.get("component").cloned(),
            op: visitor.fields.get("op").cloned(),
            event: visitor.fields.get("event").cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for reading captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events emitted for one operation name, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .collect()
    }

    /// Assert that an event exists with the given operation and event type
    ///
    /// # Panics
    ///
    /// Panics if no such event was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event));
        assert!(
            found,
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install (once) and return the process-wide capture
///
/// ```
/// use landing_core::logging_facility::test_capture::init_test_capture;
/// use landing_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_for_filters_by_op() {
        let capture = init_test_capture();
        tracing::info!(op = "capture_unit_a", event = "start");
        tracing::info!(op = "capture_unit_b", event = "start");

        let a = capture.events_for("capture_unit_a");
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].event.as_deref(), Some("start"));
    }
}
