//! Kindling engine bootstrap library crate.

pub mod constants;
pub mod error;
pub mod game;
pub mod log;
pub mod platform;
