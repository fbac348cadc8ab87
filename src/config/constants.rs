//! Constants for DMARC lookups and parsing.

/// Label prepended to a domain to form its DMARC policy name
pub const DMARC_LABEL: &str = "_dmarc";

/// Tag naming the aggregate-report destination
pub const RUA_TAG: &str = "rua";

// Record grammar
/// Separates tags within one TXT string
pub const TAG_SEPARATOR: char = ';';
/// Separates a tag's key from its value (first occurrence only)
pub const KEY_VALUE_SEPARATOR: char = '=';
/// Separates the local part of the `rua` address from its domain
pub const ADDRESS_SEPARATOR: char = '@';
