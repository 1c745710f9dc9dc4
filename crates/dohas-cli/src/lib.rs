// Rust guideline compliant 2026-02-06

//! Dohas CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::{CliStore, Context};
pub use logging::{init_tracing, LoggingError};
pub use output::{create_formatter, OutputFormatter};
