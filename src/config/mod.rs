//! Configuration management for the student service
//!
//! This module handles loading and managing configuration settings for the
//! HTTP server and the document store connection.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{DatabaseSettings, LoggingSettings, ServerSettings, Settings};

/// Shared lock so tests that mutate process environment variables do not
/// interleave across modules.
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
