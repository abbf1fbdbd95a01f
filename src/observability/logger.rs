//! Structured JSON logger
//!
//! - One log line = one event
//! - Deterministic key ordering (alphabetical, via `serde_json::Map`)
//! - Synchronous, no buffering

use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// A structured logger that writes one JSON object per line
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let _ = Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log an event to a specific writer (used by tests)
    pub fn log_to_writer(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        // serde_json::Map is a BTreeMap, so keys serialize alphabetically
        let mut object = Map::new();
        object.insert("event".to_string(), Value::String(event.to_string()));
        object.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        object.insert(
            "ts".to_string(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );
        for (key, value) in fields {
            object.insert((*key).to_string(), Value::String((*value).to_string()));
        }

        writeln!(writer, "{}", Value::Object(object))
    }

    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_is_json_with_sorted_keys() {
        let mut buf = Vec::new();
        Logger::log_to_writer(
            Severity::Info,
            "server_started",
            &[("port", "5000"), ("host", "0.0.0.0")],
            &mut buf,
        )
        .unwrap();

        let line = String::from_utf8(buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["event"], "server_started");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["port"], "5000");

        // Keys appear alphabetically in the serialized line
        let event_pos = line.find("\"event\"").unwrap();
        let host_pos = line.find("\"host\"").unwrap();
        let port_pos = line.find("\"port\"").unwrap();
        assert!(event_pos < host_pos && host_pos < port_pos);
    }

    #[test]
    fn test_one_line_per_event() {
        let mut buf = Vec::new();
        Logger::log_to_writer(Severity::Warn, "a", &[], &mut buf).unwrap();
        Logger::log_to_writer(Severity::Error, "b", &[], &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
