//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dmarc_rua` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Interrupt handling
//! - Wiring stdin/stdout to the scan loop
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;

use dmarc_rua::initialization::{init_logger_with, init_resolver};
use dmarc_rua::{log_final_statistics, run_pipeline, spawn_interrupt_watcher, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into()).context("Failed to initialize logger")?;

    let resolver = init_resolver();

    let cancel = CancellationToken::new();
    let watcher = spawn_interrupt_watcher(cancel.clone());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match run_pipeline(stdin, &mut stdout, &resolver, &cancel).await {
        Ok(report) => {
            log_final_statistics(&report);
            let _ = stdout.flush().await;
            if report.interrupted {
                // The runtime would wait on the blocking stdin reader at shutdown
                process::exit(0);
            }
            cancel.cancel();
            let _ = watcher.await;
            Ok(())
        }
        Err(e) => {
            log::error!("dmarc_rua error: {:#}", e);
            process::exit(1);
        }
    }
}
