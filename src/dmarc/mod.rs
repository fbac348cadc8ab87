//! DMARC policy record parsing.
//!
//! Pure functions with no I/O and no logging:
//! - `parse_tag()` - splits one `key=value` token
//! - `parse_record()` - folds a `;`-delimited TXT string into a `DmarcRecord`
//! - `extract_report_domain()` - pulls the receiving domain out of `rua`

mod extract;
mod record;
mod tag;

// Re-export public API
pub use extract::extract_report_domain;
pub use record::{parse_record, DmarcRecord};
pub use tag::{parse_tag, Tag};
