// src/events.rs
//! Machine-readable decision log for audit trails.
//!
//! Events are appended as JSON lines to the configured path
//! (`.routeguard/events.jsonl` by default).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    RulesLoaded {
        path: String,
        directed: usize,
        undirected: usize,
    },
    ConnectionAccepted {
        source: String,
        target: String,
    },
    ConnectionRejected {
        source: String,
        target: String,
        kind: String,
        reason: Option<String>,
    },
    ReplayFinished {
        accepted: usize,
        rejected: usize,
    },
    AuditFinished {
        path: String,
        cycles: usize,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteGuardEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Clone)]
pub struct EventLogger {
    log_path: Option<PathBuf>,
}

impl EventLogger {
    #[must_use]
    pub fn new(log_path: &Path) -> Self {
        Self {
            log_path: Some(log_path.to_path_buf()),
        }
    }

    /// A logger that drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self { log_path: None }
    }

    pub fn log(&self, kind: EventKind) {
        let Some(path) = &self.log_path else {
            return;
        };
        // Logging is best-effort. We swallow errors to avoid crashing main flow.
        match Self::serialize_event(kind) {
            Ok(json) => {
                if let Err(e) = Self::append_to_file(path, &json) {
                    tracing::warn!(path = %path.display(), error = %e, "event log write failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "event serialization failed"),
        }
    }

    fn serialize_event(kind: EventKind) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = RouteGuardEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(path: &Path, line: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");
        let logger = EventLogger::new(&path);

        logger.log(EventKind::ConnectionAccepted {
            source: "FRA".into(),
            target: "DEU".into(),
        });
        logger.log(EventKind::ReplayFinished {
            accepted: 2,
            rejected: 1,
        });

        let content = fs::read_to_string(&path).unwrap();
        let events: Vec<RouteGuardEvent> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1].kind,
            EventKind::ReplayFinished {
                accepted: 2,
                rejected: 1
            }
        );
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        EventLogger::disabled().log(EventKind::ReplayFinished {
            accepted: 0,
            rejected: 0,
        });
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
