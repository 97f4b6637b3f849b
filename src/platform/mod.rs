//! Platform abstraction layer: windowing, dialogs, and sleeping.

pub mod dialog;
pub mod display;

use std::time::Duration;

/// Sleeps precisely when the window is focused, coarsely otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}
