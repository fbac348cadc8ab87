//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (stderr, leveled)
//! - DNS resolver
//!
//! The parsing core never touches either; both are set up by the binary and
//! handed to the pipeline.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
