//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, DMARC parsing, DNS lookup)
//! - The `Outcome` categorization of each processed record
//! - Per-run outcome counters
//!
//! Failures are contained at the finest level that applies: a bad tag discards
//! its record, a failed lookup discards its domain, nothing ends the run.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{DmarcError, InitializationError, LookupError, Outcome};
