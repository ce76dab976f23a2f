use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILE_RELATIVE_PATH: &str = "logs/roleping.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Append-only JSON-lines event log. Write failures are dropped on the floor so
/// that logging can never take the wizard down.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_state_root(state_root: &Path) -> Self {
        Self::at_path(state_root.join(LOG_FILE_RELATIVE_PATH))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn info(&self, event: &str, message: &str) {
        self.append(LogLevel::Info, event, message);
    }

    pub fn warn(&self, event: &str, message: &str) {
        self.append(LogLevel::Warn, event, message);
    }

    pub fn error(&self, event: &str, message: &str) {
        self.append(LogLevel::Error, event, message);
    }

    pub fn append(&self, level: LogLevel, event: &str, message: &str) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let payload = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "level": level.as_str(),
            "event": event,
            "message": message,
        });
        let Ok(line) = serde_json::to_string(&payload) else {
            return;
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
            return;
        };
        let _ = writeln!(file, "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn append_writes_one_json_object_per_line() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log = EventLog::from_state_root(temp.path());
        log.warn("suggestions.credential_missing", "no api key");
        log.info("wizard.step", "handle -> interval");

        let raw = fs::read_to_string(temp.path().join(LOG_FILE_RELATIVE_PATH)).expect("read log");
        let lines: Vec<Value> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["level"], "warn");
        assert_eq!(lines[0]["event"], "suggestions.credential_missing");
        assert_eq!(lines[1]["message"], "handle -> interval");
        assert!(lines[1]["timestamp"].as_str().is_some());
    }

    #[test]
    fn error_events_carry_error_level() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log = EventLog::from_state_root(temp.path());
        log.error("wizard.terminal_failed", "failed to enable raw mode");
        let raw = fs::read_to_string(temp.path().join(LOG_FILE_RELATIVE_PATH)).expect("read log");
        let entry: Value = serde_json::from_str(raw.trim()).expect("json line");
        assert_eq!(entry["level"], "error");
        assert_eq!(entry["event"], "wizard.terminal_failed");
    }

    #[test]
    fn disabled_log_is_a_no_op() {
        let log = EventLog::disabled();
        log.info("anything", "ignored");
        assert!(log.path().is_none());
    }
}
