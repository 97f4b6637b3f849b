//! Categorized, dual-sink logging subsystem.
//!
//! A [`Logger`] is an explicitly constructed instance, cheaply cloneable and
//! shared by handle; its lifecycle (`open`/`close`) belongs to the owner,
//! typically the application entry point. There is no process-wide global.
//! Messages are filtered per [`Category`], formatted as
//! `[HH:mm:ss.fff CategoryName LEVEL] message`, and written to the console
//! and/or an append-only log file. File flushing is delegated to a
//! background [`FlushScheduler`].

pub mod category;
pub mod flush;
pub mod sink;

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

pub use category::{Category, CategoryRegistry, Level, CORE_ENGINE, LOGGER};
pub use flush::FlushScheduler;
pub use sink::format_line;

use crate::constants::{DEFAULT_FLUSH_INTERVAL, LOG_DIRECTORY};
use crate::error::LogError;
use crate::log::sink::SinkShared;

/// Log file name format: `yyyy-M-d_HH-mm-ss` (month and day unpadded).
const FILE_NAME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:none]-[day padding:none]_[hour]-[minute]-[second]"
);

/// Sink activation and scheduling configuration for a [`Logger`].
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub to_console: bool,
    pub to_file: bool,
    /// Directory log files are created in, relative to the working directory.
    pub directory: PathBuf,
    pub flush_interval: Duration,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            to_console: true,
            to_file: true,
            directory: PathBuf::from(LOG_DIRECTORY),
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }
}

struct LoggerInner {
    config: LoggerConfig,
    sink: Arc<SinkShared>,
    scheduler: FlushScheduler,
}

/// Handle to a logger instance. Clones share the same sinks and scheduler.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    /// Creates a closed logger. No file is opened and nothing can be written
    /// until [`Logger::open`] is called.
    pub fn new(config: LoggerConfig) -> Self {
        let flush_interval = config.flush_interval;
        Self {
            inner: Arc::new(LoggerInner {
                config,
                sink: Arc::new(SinkShared::default()),
                scheduler: FlushScheduler::new(flush_interval),
            }),
        }
    }

    /// Opens the logger. Idempotent: if already open, returns immediately
    /// with no side effects.
    ///
    /// When file logging is enabled this creates the log directory, opens a
    /// timestamped file sink, and arms the flush scheduler. Either way the
    /// logger marks itself open and logs an internal line through itself.
    pub fn open(&self) -> Result<(), LogError> {
        {
            let mut state = self.inner.sink.state.lock();
            if state.open {
                return Ok(());
            }

            if self.inner.config.to_file {
                fs::create_dir_all(&self.inner.config.directory)?;
                let stem = OffsetDateTime::now_utc().format(FILE_NAME_FORMAT)?;
                let path = self.inner.config.directory.join(format!("{stem}.log"));
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                state.file = Some(BufWriter::new(file));
            }
            state.open = true;
        }

        self.info(&LOGGER, "Logger initialized")?;

        if self.inner.config.to_file {
            self.inner.scheduler.start(Arc::clone(&self.inner.sink));
        }
        Ok(())
    }

    /// Closes the logger: logs a final internal line, stops the flush
    /// scheduler, then flushes and drops the file sink.
    ///
    /// The scheduler worker is joined before the file handle is released, so
    /// no flush can occur against a closed file. Reopening afterwards is
    /// permitted and produces a new log file.
    pub fn close(&self) -> Result<(), LogError> {
        if !self.is_open() {
            return Ok(());
        }

        self.info(&LOGGER, "Logger shutting down")?;
        self.inner.scheduler.cancel();

        let mut state = self.inner.sink.state.lock();
        if let Some(mut file) = state.file.take() {
            file.flush()?;
        }
        state.open = false;
        Ok(())
    }

    /// Writes a message at the given level.
    ///
    /// Suppressed (without error) when `level` is below the category's
    /// minimum. Returns [`LogError::Closed`] if the logger is not open,
    /// the same policy in every build profile.
    pub fn write(&self, category: &Category, level: Level, message: &str) -> Result<(), LogError> {
        if level < category.minimum() {
            return Ok(());
        }

        let mut state = self.inner.sink.state.lock();
        if !state.open {
            return Err(LogError::Closed);
        }

        let line = sink::format_line(OffsetDateTime::now_utc(), category, level, message)?;
        if self.inner.config.to_console {
            sink::write_console(level, &line)?;
        }
        if let Some(file) = state.file.as_mut() {
            // No flush here; the scheduler owns flushing cadence.
            writeln!(file, "{line}")?;
        }
        Ok(())
    }

    /// Writes a message at the category's configured default level.
    pub fn write_default(&self, category: &Category, message: &str) -> Result<(), LogError> {
        self.write(category, category.default_level(), message)
    }

    pub fn trace(&self, category: &Category, message: &str) -> Result<(), LogError> {
        self.write(category, Level::Trace, message)
    }

    pub fn info(&self, category: &Category, message: &str) -> Result<(), LogError> {
        self.write(category, Level::Info, message)
    }

    pub fn warn(&self, category: &Category, message: &str) -> Result<(), LogError> {
        self.write(category, Level::Warn, message)
    }

    pub fn error(&self, category: &Category, message: &str) -> Result<(), LogError> {
        self.write(category, Level::Error, message)
    }

    pub fn fatal(&self, category: &Category, message: &str) -> Result<(), LogError> {
        self.write(category, Level::Fatal, message)
    }

    /// Flushes the file sink. Safe whether or not file logging is enabled.
    pub fn flush(&self) -> Result<(), LogError> {
        self.inner.sink.flush()?;
        Ok(())
    }

    /// Reconfigures the flush interval in place. The scheduler re-arms
    /// immediately: one flush at the moment of the change, then the new
    /// cadence.
    pub fn set_flush_interval(&self, interval: Duration) {
        self.inner.scheduler.set_interval(interval);
    }

    pub fn flush_interval(&self) -> Duration {
        self.inner.scheduler.interval()
    }

    /// Number of times the background scheduler has flushed.
    pub fn flush_count(&self) -> u64 {
        self.inner.scheduler.fire_count()
    }

    pub fn is_open(&self) -> bool {
        self.inner.sink.state.lock().open
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.inner.config
    }
}
