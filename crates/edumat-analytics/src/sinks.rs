//! Analytics sinks — each sink records its own projection of an event.
//!
//! Every sink follows the same `AnalyticsSink` trait pattern: extract the
//! fixed subset of metrics it recognizes (substituting documented defaults
//! for missing keys) and append one entry to the shared log store.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use edumat_core::{AnalyticsEvent, Result};

use crate::log::{AnalyticsLog, AnalyticsLogEntry};

/// Which projection a log entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Boolean and free-text engagement metrics.
    Qualitative,
    /// Numeric engagement metrics.
    Quantitative,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Qualitative => "qualitative",
            SinkKind::Quantitative => "quantitative",
        }
    }
}

/// A subscriber that durably records a projection of analytics events.
/// `name()` is the sink's identity for attach/detach purposes.
pub trait AnalyticsSink: Send + Sync {
    fn name(&self) -> &str;
    fn kind(&self) -> SinkKind;
    /// Consume one event. Failures are reported to the publisher, which
    /// logs them and continues delivery to the remaining sinks.
    fn update(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Records boolean/text engagement metrics.
///
/// Projected keys and defaults: `accessed` (false), `resource_download`
/// (false), `document_upload` (false), `response_report` ("").
pub struct QualitativeSink {
    log: Arc<AnalyticsLog>,
}

impl QualitativeSink {
    pub fn new(log: Arc<AnalyticsLog>) -> Self {
        Self { log }
    }
}

impl AnalyticsSink for QualitativeSink {
    fn name(&self) -> &str {
        "qualitative"
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Qualitative
    }

    fn update(&self, event: &AnalyticsEvent) -> Result<()> {
        let data = serde_json::json!({
            "accessed": event.metric_bool("accessed"),
            "resource_download": event.metric_bool("resource_download"),
            "document_upload": event.metric_bool("document_upload"),
            "response_report": event.metric_text("response_report"),
        });
        self.log.append(&AnalyticsLogEntry {
            activity_id: event.activity_id.clone(),
            student_id: event.student_id.clone(),
            kind: SinkKind::Qualitative,
            data,
            timestamp: chrono::Utc::now(),
        })?;
        tracing::debug!(
            "📋 Qualitative entry saved for student {} on activity {}",
            event.student_id,
            event.activity_id
        );
        Ok(())
    }
}

/// Records numeric engagement metrics.
///
/// Projected keys and defaults: `access_count` (0), `resource_downloads`
/// (0), `progress_pct` (0.0).
pub struct QuantitativeSink {
    log: Arc<AnalyticsLog>,
}

impl QuantitativeSink {
    pub fn new(log: Arc<AnalyticsLog>) -> Self {
        Self { log }
    }
}

impl AnalyticsSink for QuantitativeSink {
    fn name(&self) -> &str {
        "quantitative"
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Quantitative
    }

    fn update(&self, event: &AnalyticsEvent) -> Result<()> {
        let data = serde_json::json!({
            "access_count": event.metric_count("access_count"),
            "resource_downloads": event.metric_count("resource_downloads"),
            "progress_pct": event.metric_number("progress_pct"),
        });
        self.log.append(&AnalyticsLogEntry {
            activity_id: event.activity_id.clone(),
            student_id: event.student_id.clone(),
            kind: SinkKind::Quantitative,
            data,
            timestamp: chrono::Utc::now(),
        })?;
        tracing::debug!(
            "📊 Quantitative entry saved for student {} on activity {}",
            event.student_id,
            event.activity_id
        );
        Ok(())
    }
}
