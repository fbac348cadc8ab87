//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Print the rua domain of every listed domain
/// cat domains.txt | dmarc_rua
///
/// # Trace every lookup and parse step on stderr
/// echo example.org | dmarc_rua --debug
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dmarc_rua",
    about = "Reads domains from stdin and prints the domain receiving their DMARC aggregate reports."
)]
pub struct Opt {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dmarc_rua::{Config, LogLevel};
///
/// let config = Config {
///     log_level: LogLevel::Debug,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let log_level = if opt.debug {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        Self { log_level }
    }
}
