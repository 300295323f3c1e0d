//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger, and the
//! global logger registry used by the cull_* macros.

use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use crate::log::{
    Logger, LogEntry, LogSeverity, DefaultLogger,
    set_logger, reset_logger,
};

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    // Test PartialOrd implementation
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Trace, LogSeverity::Trace);
    assert_eq!(LogSeverity::Error, LogSeverity::Error);
    assert_ne!(LogSeverity::Trace, LogSeverity::Debug);
    assert_ne!(LogSeverity::Info, LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Debug), "Debug");
    assert_eq!(format!("{:?}", LogSeverity::Info), "Info");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nebula3d::factory".to_string(),
        message: "Created BVH culler".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "nebula3d::factory");
    assert_eq!(entry.message, "Created BVH culler");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_creation_with_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nebula3d::CullingConfig".to_string(),
        message: "Failed to load config".to_string(),
        file: Some("config.rs"),
        line: Some(42),
    };

    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.file, Some("config.rs"));
    assert_eq!(entry.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: "nebula3d::test".to_string(),
        message: "warning".to_string(),
        file: None,
        line: None,
    };
    let cloned = entry.clone();
    assert_eq!(cloned.severity, entry.severity);
    assert_eq!(cloned.source, entry.source);
    assert_eq!(cloned.message, entry.message);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    // DefaultLogger writes to stdout; just verify it handles both shapes
    let logger = DefaultLogger;

    logger.log(&LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nebula3d::test".to_string(),
        message: "plain entry".to_string(),
        file: None,
        line: None,
    });

    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nebula3d::test".to_string(),
        message: "detailed entry".to_string(),
        file: Some("log_tests.rs"),
        line: Some(1),
    });
}

// ============================================================================
// GLOBAL LOGGER / MACRO TESTS
// ============================================================================

/// Test logger collecting entries into a shared vector.
struct CaptureLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String, String)>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push((
            entry.severity,
            entry.source.clone(),
            entry.message.clone(),
        ));
    }
}

#[test]
fn test_macros_route_through_global_logger() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger { entries: Arc::clone(&entries) });

    crate::cull_info!("nebula3d::log_tests", "info message {}", 1);
    crate::cull_warn!("nebula3d::log_tests", "warn message");
    crate::cull_error!("nebula3d::log_tests", "error message");

    reset_logger();

    // Other tests may log concurrently; only assert on our own entries
    let captured = entries.lock().unwrap();
    assert!(captured.iter().any(|(sev, src, msg)| {
        *sev == LogSeverity::Info
            && src == "nebula3d::log_tests"
            && msg == "info message 1"
    }));
    assert!(captured.iter().any(|(sev, src, msg)| {
        *sev == LogSeverity::Warn
            && src == "nebula3d::log_tests"
            && msg == "warn message"
    }));
    assert!(captured.iter().any(|(sev, src, msg)| {
        *sev == LogSeverity::Error
            && src == "nebula3d::log_tests"
            && msg == "error message"
    }));
}
