//! DNS TXT lookups for DMARC policy names.
//!
//! This module provides:
//! - The `TxtResolver` trait the pipeline is written against
//! - `HickoryTxtResolver`, backed by `hickory-resolver` and the host's DNS configuration
//! - `StaticTxtResolver`, answering from a fixed table
//! - `dmarc_query_name()`, building `_dmarc.<domain>`

mod memory;
mod records;

// Re-export public API
pub use memory::StaticTxtResolver;
pub use records::{dmarc_query_name, HickoryTxtResolver, TxtResolver};
