//! Shared data model — activity records and analytics events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One educational activity, keyed externally by its activity id.
/// Created with placeholder content on first reference and mutated in
/// place; records live for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Short description shown on the activity page.
    pub summary: String,
    /// Instructions for the student, typically a URL.
    pub instructions: String,
}

/// A single analytics observation, produced when an activity is created or
/// accessed and consumed once by each attached sink. Not retained by the
/// publisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub activity_id: String,
    pub student_id: String,
    /// Named metrics relevant to the moment of access — booleans, counts,
    /// free text. Sinks project the subset they recognize.
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(activity_id: &str, student_id: &str, payload: serde_json::Value) -> Self {
        Self {
            activity_id: activity_id.to_string(),
            student_id: student_id.to_string(),
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Look up a boolean metric, defaulting to `false` when missing or
    /// not a boolean.
    pub fn metric_bool(&self, key: &str) -> bool {
        self.payload[key].as_bool().unwrap_or(false)
    }

    /// Look up an integer metric, defaulting to `0`.
    pub fn metric_count(&self, key: &str) -> u64 {
        self.payload[key].as_u64().unwrap_or(0)
    }

    /// Look up a numeric metric, defaulting to `0.0`.
    pub fn metric_number(&self, key: &str) -> f64 {
        self.payload[key].as_f64().unwrap_or(0.0)
    }

    /// Look up a text metric, defaulting to the empty string.
    pub fn metric_text(&self, key: &str) -> String {
        self.payload[key].as_str().unwrap_or("").to_string()
    }
}
