//! File-based analytics log — lightweight append-only persistence.
//! One JSON-Lines file per (activity, sink kind) pair — human-readable,
//! grep-friendly. Appends never read existing entries back, so the cost of
//! recording an event stays constant as the log grows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use edumat_core::Result;

use crate::sinks::SinkKind;

/// One durably recorded projection of an analytics event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsLogEntry {
    pub activity_id: String,
    pub student_id: String,
    pub kind: SinkKind,
    /// The sink-specific projection of the event payload.
    pub data: serde_json::Value,
    /// When the entry was generated (ISO-8601 on the wire).
    pub timestamp: DateTime<Utc>,
}

/// Append-only log store shared by all sinks.
pub struct AnalyticsLog {
    dir: PathBuf,
    /// Serializes appends so two requests touching the same activity
    /// cannot interleave partial lines.
    guard: Mutex<()>,
}

impl AnalyticsLog {
    /// Create a log store rooted at the given directory.
    pub fn new(dir: &Path) -> Self {
        std::fs::create_dir_all(dir).ok();
        Self {
            dir: dir.to_path_buf(),
            guard: Mutex::new(()),
        }
    }

    /// Path of the log file for one (activity, kind) pair.
    pub fn file_path(&self, activity_id: &str, kind: SinkKind) -> PathBuf {
        self.dir.join(format!("{}_{}.jsonl", kind.as_str(), activity_id))
    }

    /// Append one entry to the log for its (activity, kind) pair.
    /// Entries are never mutated or removed once written.
    pub fn append(&self, entry: &AnalyticsLogEntry) -> Result<()> {
        let line = serde_json::to_string(entry)?;
        let path = self.file_path(&entry.activity_id, entry.kind);

        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        std::fs::create_dir_all(&self.dir)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        writeln!(file, "{line}")?;
        tracing::debug!(
            "💾 Logged {} entry for activity {} ({})",
            entry.kind.as_str(),
            entry.activity_id,
            path.display()
        );
        Ok(())
    }

    /// Read all entries recorded for one (activity, kind) pair, oldest
    /// first. Missing file means no entries yet, not an error. Lines that
    /// fail to parse are skipped with a warning.
    pub fn read(&self, activity_id: &str, kind: SinkKind) -> Vec<AnalyticsLogEntry> {
        let path = self.file_path(activity_id, kind);
        if !path.exists() {
            return Vec::new();
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .filter_map(|line| match serde_json::from_str(line) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!("⚠️ Skipping malformed log line in {}: {e}", path.display());
                        None
                    }
                })
                .collect(),
            Err(e) => {
                tracing::warn!("⚠️ Failed to read {}: {e}", path.display());
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(activity: &str, kind: SinkKind) -> AnalyticsLogEntry {
        AnalyticsLogEntry {
            activity_id: activity.into(),
            student_id: "stu1".into(),
            kind,
            data: serde_json::json!({"accessed": true}),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_append_only_growth() {
        let dir = std::env::temp_dir().join("edumat-test-log-growth");
        std::fs::remove_dir_all(&dir).ok();
        let log = AnalyticsLog::new(&dir);

        for _ in 0..5 {
            log.append(&entry("a1", SinkKind::Qualitative)).unwrap();
        }
        let entries = log.read("a1", SinkKind::Qualitative);
        assert_eq!(entries.len(), 5);
        // Timestamps are non-decreasing in append order.
        for pair in entries.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_logs_keyed_by_activity_and_kind() {
        let dir = std::env::temp_dir().join("edumat-test-log-keys");
        std::fs::remove_dir_all(&dir).ok();
        let log = AnalyticsLog::new(&dir);

        log.append(&entry("a1", SinkKind::Qualitative)).unwrap();
        log.append(&entry("a1", SinkKind::Quantitative)).unwrap();
        log.append(&entry("a2", SinkKind::Qualitative)).unwrap();

        assert_eq!(log.read("a1", SinkKind::Qualitative).len(), 1);
        assert_eq!(log.read("a1", SinkKind::Quantitative).len(), 1);
        assert_eq!(log.read("a2", SinkKind::Qualitative).len(), 1);
        assert_eq!(log.read("a2", SinkKind::Quantitative).len(), 0);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = std::env::temp_dir().join("edumat-test-log-missing");
        std::fs::remove_dir_all(&dir).ok();
        let log = AnalyticsLog::new(&dir);
        assert!(log.read("nope", SinkKind::Quantitative).is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_malformed_line_skipped() {
        let dir = std::env::temp_dir().join("edumat-test-log-malformed");
        std::fs::remove_dir_all(&dir).ok();
        let log = AnalyticsLog::new(&dir);

        log.append(&entry("a1", SinkKind::Qualitative)).unwrap();
        let path = log.file_path("a1", SinkKind::Qualitative);
        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str("not json\n");
        std::fs::write(&path, content).unwrap();
        log.append(&entry("a1", SinkKind::Qualitative)).unwrap();

        assert_eq!(log.read("a1", SinkKind::Qualitative).len(), 2);
        std::fs::remove_dir_all(&dir).ok();
    }
}
