//! Structured JSON logger
//!
//! One log line = one event. Lines are built by hand so key ordering is
//! deterministic: `event` first, then `severity`, then the remaining
//! fields alphabetically. Writes are synchronous and unbuffered.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues; every degrade path logs here
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// String form used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured JSON logger
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        Self::escape_json_string(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted_fields {
            line.push_str(",\"");
            Self::escape_json_string(&mut line, key);
            line.push_str("\":\"");
            Self::escape_json_string(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // One write_all, so a line is never interleaved
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buffer = Vec::new();
        Logger::log_to_writer(severity, event, fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead_the_line() {
        let line = render(Severity::Warn, "chapter_unavailable", &[]);
        assert_eq!(line, "{\"event\":\"chapter_unavailable\",\"severity\":\"WARN\"}\n");
    }

    #[test]
    fn test_fields_are_sorted_alphabetically() {
        let line = render(
            Severity::Info,
            "versions_loaded",
            &[("total", "12"), ("languages", "3")],
        );
        let languages = line.find("\"languages\"").unwrap();
        let total = line.find("\"total\"").unwrap();
        assert!(languages < total);
    }

    #[test]
    fn test_values_are_escaped() {
        let line = render(Severity::Error, "fetch_failed", &[("detail", "a\"b\nc")]);
        assert!(line.contains("a\\\"b\\nc"));
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = render(Severity::Warn, "w", &[("path", "x/y.html"), ("status", "404")]);
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["event"], "w");
        assert_eq!(parsed["severity"], "WARN");
        assert_eq!(parsed["status"], "404");
    }
}
