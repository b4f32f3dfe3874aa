//! Shared helpers for naive-rag-config integration tests.
//!
//! Invariants / Assumptions:
//! - Captured messages come only from the calling thread (`with_default`).

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

/// Minimal in-test tracing subscriber that records event messages.
#[derive(Clone, Default)]
struct CapturingSubscriber {
    events: Arc<Mutex<Vec<String>>>,
    next_id: Arc<AtomicU64>,
}

impl CapturingSubscriber {
    fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.lock().expect("lock poisoned"))
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

impl tracing::Subscriber for CapturingSubscriber {
    fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(msg) = visitor.message {
            self.events.lock().expect("lock poisoned").push(msg);
        }
    }

    fn enter(&self, _span: &tracing::span::Id) {}

    fn exit(&self, _span: &tracing::span::Id) {}

    fn register_callsite(
        &self,
        _metadata: &'static tracing::Metadata<'static>,
    ) -> tracing::subscriber::Interest {
        tracing::subscriber::Interest::always()
    }
}

/// Run `f` and return the messages of every event it emitted on this thread.
pub fn capture_messages<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let subscriber = CapturingSubscriber::default();
    let dispatch = tracing::Dispatch::new(subscriber.clone());
    let result = tracing::dispatcher::with_default(&dispatch, f);
    (result, subscriber.take_messages())
}
