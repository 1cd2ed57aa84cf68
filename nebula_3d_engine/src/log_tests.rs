//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Warn, LogSeverity::Error);
}

#[test]
fn test_log_severity_copy() {
    let sev1 = LogSeverity::Warn;
    let sev2 = sev1; // Copy, not move
    assert_eq!(sev1, sev2);
    assert_eq!(sev1, LogSeverity::Warn);
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nebula3d::ViewSpawner".to_string(),
        message: "view created".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "nebula3d::ViewSpawner");
    assert_eq!(entry.message, "view created");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_with_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nebula3d::display".to_string(),
        message: "context creation failed".to_string(),
        file: Some("display/headless.rs"),
        line: Some(42),
    };

    assert_eq!(entry.file, Some("display/headless.rs"));
    assert_eq!(entry.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Debug,
        timestamp: SystemTime::now(),
        source: "nebula3d::test".to_string(),
        message: "msg".to_string(),
        file: None,
        line: None,
    };
    let cloned = entry.clone();
    assert_eq!(cloned.source, entry.source);
    assert_eq!(cloned.message, entry.message);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
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
