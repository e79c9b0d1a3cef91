//! Command-line interface
//!
//! Contains the logic for running the HTTP server from the command line.

pub mod serve;

pub use serve::{ServeArgs, run_server_mode};
