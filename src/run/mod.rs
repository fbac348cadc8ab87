//! The scan loop: input lines in, report domains out.

mod task;

use std::borrow::Cow;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::dns::{dmarc_query_name, TxtResolver};
use crate::error_handling::{Outcome, ProcessingStats};

/// Results of a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Non-blank input lines processed
    pub domains: usize,
    /// TXT strings returned across all successful lookups
    pub txt_records: usize,
    /// Report domains written to the output
    pub extracted: usize,
    /// Per-outcome counters
    pub stats: ProcessingStats,
    /// `true` if the run stopped on cancellation rather than end of input
    pub interrupted: bool,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Reads domains from `input` and writes their DMARC report domains to `output`.
///
/// Lines are handled strictly one after another: each domain's lookup
/// completes before the next line is read. Blank lines are skipped. Lines that
/// are not valid UTF-8 are decoded lossily and looked up like any other. Lookup
/// and parse failures are logged and skipped; they never stop the run.
///
/// Both the line read and the lookup are raced against `cancel`. Once it is
/// cancelled the run returns with `interrupted` set, without touching the
/// remaining input.
///
/// # Arguments
///
/// * `input` - Newline-delimited domains
/// * `output` - Receives one report domain per line, flushed per line
/// * `resolver` - Source of TXT records
/// * `cancel` - Stops the run when cancelled
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
///
/// # Example
///
/// ```no_run
/// use dmarc_rua::dns::StaticTxtResolver;
/// use dmarc_rua::run_pipeline;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> anyhow::Result<()> {
/// let resolver = StaticTxtResolver::new().with_records(
///     "_dmarc.example.org",
///     ["v=DMARC1; p=reject; rua=mailto:dmarc@reports.example.org"],
/// );
/// let mut output = Vec::new();
/// let report = run_pipeline(
///     &b"example.org\n"[..],
///     &mut output,
///     &resolver,
///     &CancellationToken::new(),
/// )
/// .await?;
/// assert_eq!(output, b"reports.example.org\n");
/// assert_eq!(report.extracted, 1);
/// # Ok(())
/// # }
/// ```
pub async fn run_pipeline<I, O, R>(
    input: I,
    output: &mut O,
    resolver: &R,
    cancel: &CancellationToken,
) -> Result<ScanReport>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    R: TxtResolver,
{
    let start_time = Instant::now();
    let mut report = ScanReport::default();
    let mut lines = input.split(b'\n');

    loop {
        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                report.interrupted = true;
                break;
            }
            line = lines.next_segment() => line.context("Failed to read domain from input")?,
        };
        let Some(line) = line else {
            break;
        };

        let line = String::from_utf8_lossy(&line);
        if let Cow::Owned(_) = line {
            warn!("Input line is not valid UTF-8, decoded lossily line=\"{line}\"");
        }
        let domain = line.trim();
        if domain.is_empty() {
            continue;
        }
        report.domains += 1;
        info!("Processing domain domain={domain}");

        let name = dmarc_query_name(domain);
        let lookup = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                report.interrupted = true;
                break;
            }
            lookup = resolver.lookup_txt(&name) => lookup,
        };

        let Some(records) = task::accept_lookup(domain, lookup, &mut report.stats) else {
            continue;
        };

        for raw in &records {
            report.txt_records += 1;
            if let Some(email_domain) = task::process_txt_record(domain, raw, &mut report.stats) {
                write_line(output, &email_domain).await?;
                report.stats.record(Outcome::Extracted);
                report.extracted += 1;
            }
        }
    }

    report.elapsed_seconds = start_time.elapsed().as_secs_f64();
    debug!(
        "Scan finished domains={} extracted={} failures={} interrupted={} elapsed={:.3}s",
        report.domains,
        report.extracted,
        report.stats.total_failures(),
        report.interrupted,
        report.elapsed_seconds
    );
    Ok(report)
}

async fn write_line<O>(output: &mut O, line: &str) -> Result<()>
where
    O: AsyncWrite + Unpin,
{
    output
        .write_all(format!("{line}\n").as_bytes())
        .await
        .context("Failed to write report domain to output")?;
    output.flush().await.context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests;
