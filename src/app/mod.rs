//! Main application modules.
//!
//! This module provides interrupt handling and end-of-run statistics used by
//! the binary.

pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use shutdown::spawn_interrupt_watcher;
pub use statistics::log_final_statistics;
