//! Activity service — orchestrates the store and the analytics pipeline.
//! Every externally triggered operation goes through here: the service
//! writes/reads the store and publishes access events to the attached
//! sinks as a side effect.

use std::path::Path;
use std::sync::Arc;

use edumat_core::{ActivityRecord, EdumatConfig, Result};
use edumat_analytics::{AnalyticsLog, AnalyticsPublisher, QualitativeSink, QuantitativeSink};

use crate::store::ActivityStore;

/// Actor recorded for events not tied to a student (activity provisioning).
const SYSTEM_ACTOR: &str = "system";

pub struct ActivityService {
    store: ActivityStore,
    publisher: AnalyticsPublisher,
    log: Arc<AnalyticsLog>,
}

impl ActivityService {
    /// Wire up the store and a publisher with both production sinks
    /// attached, writing logs under the configured data directory.
    pub fn new(config: &EdumatConfig) -> Self {
        Self::with_data_dir(config, Path::new(&config.analytics.data_dir))
    }

    /// Same wiring with an explicit log directory (tests point this at a
    /// scratch dir).
    pub fn with_data_dir(config: &EdumatConfig, data_dir: &Path) -> Self {
        let store = ActivityStore::new(
            &config.activity.default_summary,
            &config.activity.default_instructions,
        );
        let log = Arc::new(AnalyticsLog::new(data_dir));
        let mut publisher = AnalyticsPublisher::new();
        publisher.attach(Box::new(QualitativeSink::new(log.clone())));
        publisher.attach(Box::new(QuantitativeSink::new(log.clone())));
        Self { store, publisher, log }
    }

    /// Provision an activity (idempotent) and record a creation event on
    /// behalf of the system actor.
    pub fn create_activity(&self, activity_id: &str) -> ActivityRecord {
        let record = self.store.create(activity_id);
        self.publisher.publish(
            activity_id,
            SYSTEM_ACTOR,
            serde_json::json!({"accessed": true, "access_count": 1}),
        );
        record
    }

    /// Read an activity record. When a student id accompanies the read,
    /// an access event is recorded for that student; analytics never
    /// blocks or fails the read itself.
    pub fn get_activity(
        &self,
        activity_id: &str,
        student_id: Option<&str>,
    ) -> Option<ActivityRecord> {
        if let Some(student_id) = student_id.filter(|s| !s.is_empty()) {
            if !activity_id.is_empty() {
                self.publisher.publish(
                    activity_id,
                    student_id,
                    serde_json::json!({
                        "accessed": true,
                        "access_count": 1,
                        "accessed_at": chrono::Utc::now().to_rfc3339(),
                    }),
                );
            }
        }
        self.store.get(activity_id)
    }

    /// Update an activity's configuration. NotFound from the store is
    /// propagated unchanged.
    pub fn update_activity(
        &self,
        activity_id: &str,
        summary: Option<&str>,
        instructions: Option<&str>,
    ) -> Result<ActivityRecord> {
        self.store.update(activity_id, summary, instructions)
    }

    /// The shared log store, for read access to recorded entries.
    pub fn analytics_log(&self) -> &Arc<AnalyticsLog> {
        &self.log
    }

    pub fn activity_count(&self) -> usize {
        self.store.len()
    }
}
