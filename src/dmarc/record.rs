//! Whole-record parsing.

use std::collections::HashMap;
use std::str::FromStr;

use crate::config::TAG_SEPARATOR;
use crate::error_handling::DmarcError;

use super::tag::{parse_tag, Tag};

/// A parsed DMARC record: tag key to tag value.
///
/// Keys are unique. When a key repeats inside one TXT string the later value
/// replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DmarcRecord {
    tags: HashMap<String, String>,
}

impl DmarcRecord {
    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// `true` when the record holds no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over `(key, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inserts a tag, overwriting any previous value for the same key.
    pub fn insert(&mut self, tag: Tag) {
        self.tags.insert(tag.key, tag.value);
    }
}

/// Parses one raw TXT string into a `DmarcRecord`.
///
/// The string is split on `;`. Each token is trimmed, empty tokens are
/// skipped and the rest go through `parse_tag`. Parsing is fail-fast: the
/// first malformed tag discards the whole record.
///
/// # Arguments
///
/// * `raw` - One TXT string as returned by the resolver (may be empty)
///
/// # Returns
///
/// The populated record. An empty or separator-only string yields an empty record.
///
/// # Errors
///
/// Returns `DmarcError::MalformedTag` for the first token lacking `=`.
pub fn parse_record(raw: &str) -> Result<DmarcRecord, DmarcError> {
    let mut record = DmarcRecord::default();

    for token in raw.split(TAG_SEPARATOR) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        record.insert(parse_tag(token)?);
    }

    Ok(record)
}

impl FromStr for DmarcRecord {
    type Err = DmarcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}
