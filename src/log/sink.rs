//! Log line formatting and the shared file/console sinks.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use parking_lot::Mutex;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::log::category::{Category, Level};

/// Cached format description for log line timestamps.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Formats a single log line: `[HH:mm:ss.fff CategoryName LEVEL] message`.
///
/// Pure with respect to the clock; callers pass the timestamp in.
pub fn format_line(
    at: OffsetDateTime,
    category: &Category,
    level: Level,
    message: &str,
) -> Result<String, time::error::Format> {
    let timestamp = at.format(&TIMESTAMP_FORMAT)?;
    Ok(format!("[{timestamp} {} {level}] {message}", category.name()))
}

/// Mutable sink state, guarded by the mutex in [`SinkShared`].
#[derive(Default)]
pub(crate) struct SinkState {
    /// Whether the logger is between `open()` and `close()`.
    pub open: bool,
    /// Open file sink, present only when file logging is enabled.
    pub file: Option<BufWriter<File>>,
}

/// The sink state shared between the logger and the flush scheduler.
///
/// Contention is rare (one flush every few seconds) and the critical
/// sections are short, so a single mutex is sufficient.
#[derive(Default)]
pub(crate) struct SinkShared {
    pub state: Mutex<SinkState>,
}

impl SinkShared {
    /// Flushes the file sink if one is open; a no-op otherwise.
    pub fn flush(&self) -> io::Result<()> {
        let mut state = self.state.lock();
        if let Some(file) = state.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Writes a formatted line to standard output with the level's color,
/// restoring the neutral color afterward.
pub(crate) fn write_console(level: Level, line: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}{line}\x1b[0m", level.color_code())
}
