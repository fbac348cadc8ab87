//! Aggregate-report domain extraction from the `rua` tag.

use crate::config::{ADDRESS_SEPARATOR, RUA_TAG};
use crate::error_handling::DmarcError;

use super::record::DmarcRecord;

/// Extracts the domain that receives aggregate reports.
///
/// The whole `rua` value is treated as one address and must contain exactly
/// one `@`; the text after it is returned unmodified. This is intentionally
/// simpler than RFC 7489: a `mailto:` prefix ends up in the discarded local
/// part, but several comma-separated destinations or a `!size` suffix are not
/// understood and will either mis-split or be rejected.
///
/// # Arguments
///
/// * `record` - A successfully parsed record
///
/// # Returns
///
/// `Ok(Some(domain))` on success, `Ok(None)` if the record has no `rua` tag.
///
/// # Errors
///
/// Returns `DmarcError::InvalidAddress` if the value does not split into
/// exactly two parts on `@`.
pub fn extract_report_domain(record: &DmarcRecord) -> Result<Option<String>, DmarcError> {
    let Some(rua) = record.get(RUA_TAG) else {
        return Ok(None);
    };

    let parts: Vec<&str> = rua.split(ADDRESS_SEPARATOR).collect();
    match parts.as_slice() {
        [_, domain] => Ok(Some((*domain).to_string())),
        _ => Err(DmarcError::InvalidAddress {
            value: rua.to_string(),
        }),
    }
}
