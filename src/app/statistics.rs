//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{Outcome, ProcessingStats};
use crate::run::ScanReport;

/// Logs the run summary and the per-outcome counts.
///
/// Everything goes through `info!`, so the summary only shows with `--debug`
/// or an explicit `RUST_LOG=info`.
pub fn log_final_statistics(report: &ScanReport) {
    info!("{}", summary_line(report));
    log_outcome_statistics(&report.stats);
    if report.interrupted {
        info!("Run interrupted before end of input");
    }
}

/// Logs every non-zero outcome counter.
pub fn log_outcome_statistics(stats: &ProcessingStats) {
    let total_failures = stats.total_failures();
    if total_failures > 0 {
        info!("Failure Counts ({} total):", total_failures);
    }
    for outcome in Outcome::iter() {
        let count = stats.count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}

/// One-line summary of a run.
pub(crate) fn summary_line(report: &ScanReport) -> String {
    format!(
        "Processed {} domain{} ({} TXT record{}, {} report domain{} extracted) in {:.1}s",
        report.domains,
        if report.domains == 1 { "" } else { "s" },
        report.txt_records,
        if report.txt_records == 1 { "" } else { "s" },
        report.extracted,
        if report.extracted == 1 { "" } else { "s" },
        report.elapsed_seconds
    )
}
