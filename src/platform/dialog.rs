//! Modal OS-level alert dialogs, delegated to SDL's message box support.

use sdl2::messagebox::{show_simple_message_box, MessageBoxFlag};
use strum_macros::Display;

use crate::error::PlatformError;

/// Severity of an alert dialog.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

impl AlertLevel {
    /// The message box style for this severity. Exhaustive by construction.
    pub fn flag(self) -> MessageBoxFlag {
        match self {
            AlertLevel::Info => MessageBoxFlag::INFORMATION,
            AlertLevel::Warning => MessageBoxFlag::WARNING,
            AlertLevel::Error => MessageBoxFlag::ERROR,
        }
    }
}

/// The title used when the caller does not supply one.
pub fn default_title(game_name: &str) -> String {
    format!("{game_name} Alert")
}

/// Resolves an optional alert title: the caller's own, or
/// `"<game_name> Alert"`.
pub fn resolve_title(game_name: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => title.to_string(),
        None => default_title(game_name),
    }
}

/// Shows a modal OS message box. Blocks until dismissed.
///
/// Carries no state of its own; purely delegated to the OS capability.
pub fn alert(level: AlertLevel, message: &str, title: &str) -> Result<(), PlatformError> {
    show_simple_message_box(level.flag(), title, message, None)
        .map_err(|e| PlatformError::Dialog(e.to_string()))
}
