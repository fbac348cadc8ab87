//! Per-domain and per-record processing.
//!
//! Everything here logs and counts failures and then lets the caller move on;
//! nothing returns an error that would stop the run.

use log::{debug, info, warn};

use crate::dmarc::{extract_report_domain, parse_record};
use crate::error_handling::{LookupError, Outcome, ProcessingStats};

/// Normalizes a raw TXT string before parsing: trimmed and lower-cased.
pub(crate) fn normalize_txt(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Unwraps a lookup result, logging and counting failures.
///
/// An empty answer is treated like "no records found".
///
/// # Returns
///
/// The TXT strings to process, or `None` if the domain must be skipped.
pub(crate) fn accept_lookup(
    domain: &str,
    result: Result<Vec<String>, LookupError>,
    stats: &mut ProcessingStats,
) -> Option<Vec<String>> {
    match result {
        Ok(records) if records.is_empty() => {
            warn!("Failed to lookup DMARC TXT record domain={domain} error=\"empty answer\"");
            stats.record(Outcome::LookupFailed);
            None
        }
        Ok(records) => {
            debug!("DMARC TXT records found domain={domain} records={records:?}");
            Some(records)
        }
        Err(e) => {
            warn!("Failed to lookup DMARC TXT record domain={domain} error=\"{e}\"");
            stats.record(Outcome::LookupFailed);
            None
        }
    }
}

/// Runs one TXT string through the parser and the `rua` extractor.
///
/// # Returns
///
/// The report domain to emit, or `None` if the record yields nothing
/// (no `rua` tag, malformed tag, invalid address).
pub(crate) fn process_txt_record(
    domain: &str,
    raw: &str,
    stats: &mut ProcessingStats,
) -> Option<String> {
    let record = normalize_txt(raw);
    debug!("Parsing DMARC record domain={domain} record=\"{record}\"");

    let parsed = match parse_record(&record) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Failed to parse DMARC record domain={domain} record=\"{record}\" error=\"{e}\"");
            stats.record(Outcome::from(&e));
            return None;
        }
    };
    debug!("Parsed DMARC record domain={domain} parsed_record={parsed:?}");

    match extract_report_domain(&parsed) {
        Ok(Some(email_domain)) => {
            info!("Extracted email domain from 'rua' tag domain={domain} email_domain={email_domain}");
            Some(email_domain)
        }
        Ok(None) => {
            debug!("No 'rua' tag found in DMARC record domain={domain}");
            stats.record(Outcome::MissingRua);
            None
        }
        Err(e) => {
            warn!("Invalid 'rua' email address domain={domain} error=\"{e}\"");
            stats.record(Outcome::from(&e));
            None
        }
    }
}
