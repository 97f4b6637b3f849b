//! Centralized error types for the engine bootstrap layer.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the engine.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while bootstrapping a game.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Log error: {0}")]
    Log(#[from] LogError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised by the logging subsystem.
#[derive(thiserror::Error, Debug)]
pub enum LogError {
    /// The logger was used before `open()` or after `close()`. This is one
    /// consistent policy across build profiles; there is no silent null-sink
    /// fallback in release builds.
    #[error("Logger is not open")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Platform-specific errors (windowing, dialogs).
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("SDL initialization failed: {0}")]
    Init(String),

    #[error("Window creation failed: {0}")]
    WindowCreate(String),

    #[error("Window operation failed: {0}")]
    Window(String),

    #[error("Message box failed: {0}")]
    Dialog(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
