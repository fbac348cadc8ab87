//! dmarc_rua library: DMARC aggregate-report domain extraction
//!
//! Reads domain names, looks up their `_dmarc.<domain>` TXT records, parses the
//! `tag=value` policy grammar and extracts the domain that receives aggregate
//! reports (the part after `@` in the `rua` tag).
//!
//! The parser in [`dmarc`] is pure and has no logging or I/O. [`run_pipeline`]
//! drives it over an input stream through any [`dns::TxtResolver`].
//!
//! # Example
//!
//! ```no_run
//! use dmarc_rua::initialization::init_resolver;
//! use dmarc_rua::run_pipeline;
//! use tokio::io::BufReader;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let resolver = init_resolver();
//! let mut stdout = tokio::io::stdout();
//! let report = run_pipeline(
//!     BufReader::new(tokio::io::stdin()),
//!     &mut stdout,
//!     &resolver,
//!     &CancellationToken::new(),
//! )
//! .await?;
//! eprintln!("{} report domains extracted", report.extracted);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! [`run_pipeline`] and the hickory-backed resolver need a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dmarc;
pub mod dns;
mod error_handling;
pub mod initialization;
mod run;

// Re-export public API
pub use app::{log_final_statistics, spawn_interrupt_watcher};
pub use config::{Config, LogLevel, Opt};
pub use error_handling::{DmarcError, InitializationError, LookupError, Outcome, ProcessingStats};
pub use run::{run_pipeline, ScanReport};
