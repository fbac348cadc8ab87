//! Application configuration and constants.
//!
//! This module provides:
//! - DMARC grammar constants
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogLevel, Opt};
