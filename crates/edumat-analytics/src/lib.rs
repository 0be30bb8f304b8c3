//! # EduMat Analytics
//!
//! Publish/subscribe analytics pipeline: the publisher fans each recorded
//! event out to a set of attached sinks, and each sink appends its own
//! projection of the event to a durable per-activity log.
//!
//! ## Architecture
//! ```text
//! ActivityService
//!   └── publish(activity_id, student_id, payload)
//!         ├── QualitativeSink  → analytics_data/qualitative_<id>.jsonl
//!         └── QuantitativeSink → analytics_data/quantitative_<id>.jsonl
//! ```
//!
//! Delivery is synchronous, sequential, and best-effort: a failing sink is
//! logged and skipped, never blocking the primary activity operation.

pub mod descriptor;
pub mod log;
pub mod publisher;
pub mod sinks;

pub use log::{AnalyticsLog, AnalyticsLogEntry};
pub use publisher::AnalyticsPublisher;
pub use sinks::{AnalyticsSink, QualitativeSink, QuantitativeSink, SinkKind};
