//! This module contains all the constants used by the bootstrap layer.

use std::time::Duration;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// How often the flush scheduler writes the file sink out to disk.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(5);

/// Where log files are created, relative to the process working directory.
pub const LOG_DIRECTORY: &str = "Saved/Logs";

/// The default window size, in pixels.
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// The default window title format. See [`crate::game::title::format_title`].
pub const DEFAULT_TITLE_FORMAT: &str = "<GameName> (<API>, FPS: <FPS>)";
