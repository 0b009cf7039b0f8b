//! Shared primitives: colors and geometry, the error type, and editor configuration.

pub mod config;
pub mod core;
pub mod error;
