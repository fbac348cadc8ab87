//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::{IsTerminal, Write};

use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level.
///
/// Configures `env_logger` to write one line per record to stderr:
/// an RFC 3339 timestamp, the colored level, the target and the message.
/// Colors are only forced on when stderr is a terminal.
///
/// Directives in `RUST_LOG` are honored. A `level` above the default `Warn`
/// (what `--debug` asks for) replaces them; the default level only applies
/// when `RUST_LOG` is unset or empty.
///
/// # Arguments
///
/// * `level` - Minimum log level to display
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-domain progress without the parser's debug output
/// RUST_LOG=info dmarc_rua < domains.txt
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=hickory_resolver=debug dmarc_rua --debug < domains.txt
/// ```
pub fn init_logger_with(level: LevelFilter) -> Result<(), InitializationError> {
    colored::control::set_override(std::io::stderr().is_terminal());

    let env_filter = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let logger = build_logger(level, env_filter.as_deref());

    // Same steps as env_logger's try_init(); a second install returns an error
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);

    Ok(())
}

/// Builds the stderr logger from the CLI level and the `RUST_LOG` directives.
fn build_logger(level: LevelFilter, env_filter: Option<&str>) -> env_logger::Logger {
    let env_filter = env_filter.filter(|f| !f.trim().is_empty());

    let mut builder = env_logger::Builder::new();
    if let Some(filter) = env_filter {
        builder.parse_filters(filter);
    }

    if env_filter.is_none() || level > LevelFilter::Warn {
        builder.filter_level(level);
        builder.filter_module("dmarc_rua", level);
    }

    // hickory logs malformed or truncated UDP answers it already recovers from
    for (module, clamp) in [
        ("hickory_proto", LevelFilter::Error),
        ("hickory_resolver", LevelFilter::Warn),
    ] {
        if !env_filter.is_some_and(|f| f.contains(module)) {
            builder.filter_module(module, clamp);
        }
    }
    builder.target(env_logger::Target::Stderr);

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {} {} {}",
            chrono::Local::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
                .dimmed(),
            level_label(record.level()),
            record.target().cyan(),
            record.args()
        )
    });

    builder.build()
}

/// Three-letter, colored level tag in the style of console log writers.
fn level_label(level: log::Level) -> ColoredString {
    match level {
        log::Level::Error => "ERR".red(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".purple(),
    }
}
