//! JSONL file writer for call-quality metric events.
//!
//! Each [`MetricEvent`] is serialized as a single JSON line with `type`,
//! `timestamp`, `namespace` and `environment`, appended to the file via a
//! buffered writer.

use helpdesk_application::{CapabilityError, MetricsSink};
use helpdesk_domain::MetricEvent;
use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Namespace every metric is published under.
pub const METRICS_NAMESPACE: &str = "Helpdesk/Quality";

/// JSONL metrics sink that appends one JSON object per event.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and on `Drop`.
pub struct JsonlMetricsSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    environment: String,
}

impl JsonlMetricsSink {
    /// Open (or create) the file at `path` for appending.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>, environment: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create metrics directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open metrics file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            environment: environment.into(),
        })
    }

    /// Get the path to the metrics file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_record(&self, event: &MetricEvent) -> serde_json::Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let metrics: Vec<serde_json::Value> = event
            .data
            .iter()
            .map(|datum| {
                let mut dimensions = serde_json::Map::new();
                for (name, value) in &datum.dimensions {
                    dimensions.insert((*name).to_string(), json!(value));
                }
                dimensions.insert("Environment".to_string(), json!(self.environment));
                json!({
                    "name": datum.name,
                    "value": datum.value,
                    "unit": datum.unit,
                    "dimensions": dimensions,
                })
            })
            .collect();

        json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "namespace": METRICS_NAMESPACE,
            "environment": self.environment,
            "metrics": metrics,
        })
    }
}

impl MetricsSink for JsonlMetricsSink {
    fn record(&self, event: &MetricEvent) -> Result<(), CapabilityError> {
        let line = serde_json::to_string(&self.to_record(event))
            .map_err(|e| CapabilityError::Other(e.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| CapabilityError::Unavailable("metrics writer poisoned".to_string()))?;
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|e| CapabilityError::RequestFailed(format!("{}: {e}", self.path.display())))
    }
}

impl Drop for JsonlMetricsSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_domain::{CallMetrics, KnowledgeBaseMetrics};
    use std::time::Duration;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics/quality.jsonl");
        let sink = JsonlMetricsSink::new(&path, "prod").unwrap();

        sink.record(&MetricEvent::from(&CallMetrics {
            response_time: Duration::from_millis(1200),
            category: "receipt".to_string(),
            confidence: 0.67,
            answer_found: true,
            error_type: None,
        }))
        .unwrap();
        sink.record(&MetricEvent::from(&KnowledgeBaseMetrics {
            search_time: Duration::from_millis(80),
            result_count: 3,
            top_score: 0.81,
        }))
        .unwrap();
        drop(sink);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);

        let first = &lines[0];
        assert_eq!(first["type"], "call_metrics");
        assert_eq!(first["namespace"], "Helpdesk/Quality");
        assert_eq!(first["environment"], "prod");
        assert!(first.get("timestamp").is_some());

        let response_time = &first["metrics"][0];
        assert_eq!(response_time["name"], "ResponseTime");
        assert_eq!(response_time["unit"], "Seconds");
        assert_eq!(response_time["dimensions"]["Category"], "receipt");
        assert_eq!(response_time["dimensions"]["Environment"], "prod");

        assert_eq!(lines[1]["type"], "kb_metrics");
        assert_eq!(lines[1]["metrics"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality.jsonl");
        let event = MetricEvent::from(&KnowledgeBaseMetrics {
            search_time: Duration::from_millis(10),
            result_count: 0,
            top_score: 0.0,
        });

        for _ in 0..2 {
            let sink = JsonlMetricsSink::new(&path, "dev").unwrap();
            sink.record(&event).unwrap();
        }

        assert_eq!(read_lines(&path).len(), 2);
    }
}
