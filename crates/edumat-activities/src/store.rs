//! In-memory activity store — the single shared table all activity data
//! flows through. One explicitly constructed instance is shared by every
//! consumer; the interior mutex keeps concurrent requests from losing
//! updates to the same record.

use std::collections::HashMap;
use std::sync::Mutex;

use edumat_core::{ActivityRecord, EdumatError, Result};

/// Process-wide keyed table mapping an activity id to its mutable record.
/// Records are never deleted; an activity is either Unregistered (no
/// record) or Registered, and only `create` moves it forward.
pub struct ActivityStore {
    default_summary: String,
    default_instructions: String,
    records: Mutex<HashMap<String, ActivityRecord>>,
}

impl ActivityStore {
    /// Create an empty store with the placeholder content new records
    /// start out with.
    pub fn new(default_summary: &str, default_instructions: &str) -> Self {
        Self {
            default_summary: default_summary.to_string(),
            default_instructions: default_instructions.to_string(),
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Idempotent create: initialize a record with the default content if
    /// none exists, and return the record either way. A record that was
    /// already customized is left untouched.
    pub fn create(&self, activity_id: &str) -> ActivityRecord {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records
            .entry(activity_id.to_string())
            .or_insert_with(|| {
                tracing::info!("🆕 Registered activity {activity_id}");
                ActivityRecord {
                    summary: self.default_summary.clone(),
                    instructions: self.default_instructions.clone(),
                }
            })
            .clone()
    }

    /// Read a record. Unknown ids are a normal outcome, not an error.
    pub fn get(&self, activity_id: &str) -> Option<ActivityRecord> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.get(activity_id).cloned()
    }

    /// Update an existing record, applying only the supplied non-empty
    /// fields. Fails with `NotFound` when the id was never registered.
    pub fn update(
        &self,
        activity_id: &str,
        summary: Option<&str>,
        instructions: Option<&str>,
    ) -> Result<ActivityRecord> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let record = records
            .get_mut(activity_id)
            .ok_or_else(|| EdumatError::NotFound(activity_id.to_string()))?;
        if let Some(summary) = summary.filter(|s| !s.is_empty()) {
            record.summary = summary.to_string();
        }
        if let Some(instructions) = instructions.filter(|s| !s.is_empty()) {
            record.instructions = instructions.to_string();
        }
        Ok(record.clone())
    }

    /// Number of registered activities.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ActivityStore {
        ActivityStore::new("default summary", "https://example.com/instructions")
    }

    #[test]
    fn test_create_uses_defaults() {
        let store = store();
        let rec = store.create("a1");
        assert_eq!(rec.summary, "default summary");
        assert_eq!(rec.instructions, "https://example.com/instructions");
    }

    #[test]
    fn test_create_is_idempotent() {
        let store = store();
        store.create("a1");
        store.update("a1", Some("customized"), None).unwrap();
        // A second create must not overwrite the customized record.
        let rec = store.create("a1");
        assert_eq!(rec.summary, "customized");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_is_none() {
        assert!(store().get("missing").is_none());
    }

    #[test]
    fn test_update_requires_existing_record() {
        let store = store();
        let err = store.update("a2", Some("s"), None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let store = store();
        store.create("a1");

        let rec = store.update("a1", Some("new summary"), None).unwrap();
        assert_eq!(rec.summary, "new summary");
        assert_eq!(rec.instructions, "https://example.com/instructions");

        let rec = store.update("a1", None, Some("https://other")).unwrap();
        assert_eq!(rec.summary, "new summary");
        assert_eq!(rec.instructions, "https://other");
    }

    #[test]
    fn test_update_ignores_empty_strings() {
        let store = store();
        store.create("a1");
        let rec = store.update("a1", Some(""), Some("")).unwrap();
        assert_eq!(rec.summary, "default summary");
        assert_eq!(rec.instructions, "https://example.com/instructions");
    }
}
