//! # Utilities Module
//!
//! Internal utility modules for the selector-core crate.

pub(crate) mod logger;

pub use logger::setup_logger;
pub use tracing_appender::non_blocking::WorkerGuard;
