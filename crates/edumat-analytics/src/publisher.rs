//! Analytics publisher — fans each recorded event out to attached sinks.
//! Lightweight: no queues, no broker. Delivery is synchronous, in
//! attachment order, and best-effort.

use edumat_core::AnalyticsEvent;

use crate::sinks::AnalyticsSink;

/// Holds the subscription list and delivers events to it. The publisher
/// owns its sinks but not their underlying log files.
pub struct AnalyticsPublisher {
    sinks: Vec<Box<dyn AnalyticsSink>>,
}

impl AnalyticsPublisher {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Register a sink. Duplicate registration (same `name()`) is a no-op.
    pub fn attach(&mut self, sink: Box<dyn AnalyticsSink>) {
        if self.sinks.iter().any(|s| s.name() == sink.name()) {
            tracing::debug!("Sink '{}' already attached, ignoring", sink.name());
            return;
        }
        tracing::info!("🔗 Analytics sink attached: {}", sink.name());
        self.sinks.push(sink);
    }

    /// Remove a previously attached sink by name. Returns whether a sink
    /// was actually removed; detaching an unknown name is a no-op.
    pub fn detach(&mut self, name: &str) -> bool {
        let before = self.sinks.len();
        self.sinks.retain(|s| s.name() != name);
        self.sinks.len() < before
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Deliver one event to every attached sink, in attachment order.
    /// A sink failure is logged and delivery continues — analytics is
    /// best-effort, never transactional with the primary operation.
    pub fn publish(&self, activity_id: &str, student_id: &str, payload: serde_json::Value) {
        tracing::info!(
            "📣 Recording analytics for student {} on activity {}",
            student_id,
            activity_id
        );
        let event = AnalyticsEvent::new(activity_id, student_id, payload);
        for sink in &self.sinks {
            if let Err(e) = sink.update(&event) {
                tracing::warn!("⚠️ Analytics sink '{}' failed: {e}", sink.name());
            }
        }
    }
}

impl Default for AnalyticsPublisher {
    fn default() -> Self {
        Self::new()
    }
}
