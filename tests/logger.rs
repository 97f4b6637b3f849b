use std::fs;
use std::path::Path;
use std::time::Duration;

use kindling::error::LogError;
use kindling::log::{format_line, Category, Level, Logger, LoggerConfig, CORE_ENGINE};
use time::macros::datetime;

use pretty_assertions::assert_eq;

/// A file-only logger writing into the given directory. Console output is
/// disabled so test output stays clean.
fn file_logger(dir: &Path) -> Logger {
    Logger::new(LoggerConfig {
        to_console: false,
        to_file: true,
        directory: dir.to_path_buf(),
        flush_interval: Duration::from_secs(60),
    })
}

fn log_files(dir: &Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "log"))
        .collect()
}

fn read_lines(dir: &Path) -> Vec<String> {
    let files = log_files(dir);
    assert_eq!(files.len(), 1, "expected exactly one log file");
    fs::read_to_string(&files[0])
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_format_line_exact() {
    let at = datetime!(2024-01-02 13:05:02.004 UTC);
    let line = format_line(at, &CORE_ENGINE, Level::Info, "hello").unwrap();
    assert_eq!(line, "[13:05:02.004 CoreEngine INFO] hello");
}

#[test]
fn test_format_line_level_token() {
    let at = datetime!(2024-01-02 00:00:00.000 UTC);
    let line = format_line(at, &CORE_ENGINE, Level::Fatal, "boom").unwrap();
    assert_eq!(line, "[00:00:00.000 CoreEngine FATAL] boom");
}

#[test]
fn test_open_creates_one_file_and_logs_once() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());

    logger.open().unwrap();
    assert!(logger.is_open());

    // Re-entrant open is a no-op: still one file, one "initialized" line.
    logger.open().unwrap();
    logger.close().unwrap();

    assert_eq!(log_files(dir.path()).len(), 1);
    let initialized = read_lines(dir.path())
        .iter()
        .filter(|line| line.contains("Logger initialized"))
        .count();
    assert_eq!(initialized, 1);
}

#[test]
fn test_filtering_below_minimum_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());
    logger.open().unwrap();

    let quiet = Category::new("Quiet", Level::Warn, Level::Warn);
    logger.trace(&quiet, "suppressed").unwrap();
    logger.info(&quiet, "suppressed").unwrap();
    logger.warn(&quiet, "written").unwrap();
    logger.error(&quiet, "written").unwrap();
    logger.fatal(&quiet, "written").unwrap();
    logger.close().unwrap();

    let lines: Vec<String> = read_lines(dir.path())
        .into_iter()
        .filter(|line| line.contains("Quiet"))
        .collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.ends_with("written")));
}

#[test]
fn test_write_default_uses_category_default_level() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());
    logger.open().unwrap();

    let category = Category::new("Startup", Level::Trace, Level::Warn);
    logger.write_default(&category, "defaulted").unwrap();
    logger.close().unwrap();

    let lines = read_lines(dir.path());
    let line = lines.iter().find(|l| l.contains("Startup")).unwrap();
    assert!(line.contains(" WARN] defaulted"), "unexpected line: {line}");
}

#[test]
fn test_write_while_closed_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());

    // Never opened.
    let result = logger.info(&CORE_ENGINE, "too early");
    assert!(matches!(result, Err(LogError::Closed)));

    // Opened and closed again.
    logger.open().unwrap();
    logger.close().unwrap();
    let result = logger.info(&CORE_ENGINE, "too late");
    assert!(matches!(result, Err(LogError::Closed)));
}

#[test]
fn test_close_is_tolerated_when_closed() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());
    logger.close().unwrap();
    assert!(!logger.is_open());
}

#[test]
fn test_reopen_after_close() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());

    logger.open().unwrap();
    logger.close().unwrap();
    assert!(!logger.is_open());

    logger.open().unwrap();
    assert!(logger.is_open());
    logger.info(&CORE_ENGINE, "second life").unwrap();
    logger.close().unwrap();
}

#[test]
fn test_file_logging_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::new(LoggerConfig {
        to_console: false,
        to_file: false,
        directory: dir.path().join("never-created"),
        flush_interval: Duration::from_secs(60),
    });

    logger.open().unwrap();
    assert!(logger.is_open());
    assert!(!dir.path().join("never-created").exists());

    // Flush is a safe no-op without a file sink.
    logger.flush().unwrap();
    logger.info(&CORE_ENGINE, "console-less, file-less").unwrap();
    logger.close().unwrap();
}

#[test]
fn test_shutdown_line_is_flushed_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());
    logger.open().unwrap();
    logger.close().unwrap();

    let lines = read_lines(dir.path());
    assert!(lines.iter().any(|l| l.contains("Logger shutting down")));
}

#[test]
fn test_clones_share_state() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());
    let clone = logger.clone();

    logger.open().unwrap();
    assert!(clone.is_open());
    clone.close().unwrap();
    assert!(!logger.is_open());
}

#[test]
fn test_line_format_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(dir.path());
    logger.open().unwrap();
    logger.error(&CORE_ENGINE, "formatted output").unwrap();
    logger.close().unwrap();

    let lines = read_lines(dir.path());
    let line = lines.iter().find(|l| l.contains("formatted output")).unwrap();
    assert!(line.starts_with('['), "line missing bracket: {line}");
    assert!(line.contains("CoreEngine ERROR] formatted output"));

    // `[HH:mm:ss.fff ` prefix is fixed-width.
    assert_eq!(line.find("CoreEngine"), Some(14));
}
