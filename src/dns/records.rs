//! DMARC TXT record queries.
//!
//! This module provides the `TxtResolver` seam and its `hickory-resolver`
//! implementation used by the binary.

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioResolver;

use crate::config::DMARC_LABEL;
use crate::error_handling::LookupError;

/// Source of TXT records.
///
/// The pipeline only ever asks for TXT strings by name, so anything able to
/// answer that (a real resolver, a fixed table in tests) can drive it.
#[allow(async_fn_in_trait)]
pub trait TxtResolver {
    /// Returns every TXT string published at `name`.
    ///
    /// Records split into several character-strings are joined without a
    /// separator, so each returned string is one complete record.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// Builds the DMARC policy name for a domain.
///
/// A trailing dot on the domain is dropped, so `example.org.` and `example.org`
/// both query `_dmarc.example.org`.
pub fn dmarc_query_name(domain: &str) -> String {
    format!("{}.{}", DMARC_LABEL, domain.trim_end_matches('.'))
}

/// `TxtResolver` backed by a `hickory-resolver` Tokio resolver.
pub struct HickoryTxtResolver {
    resolver: TokioResolver,
}

impl HickoryTxtResolver {
    /// Wraps an already configured resolver.
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        match self.resolver.lookup(name, RecordType::TXT).await {
            Ok(lookup) => {
                let txt_records: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::TXT(txt) = rdata {
                            Some(join_character_strings(txt.iter().map(|b| &b[..])))
                        } else {
                            None
                        }
                    })
                    .collect();
                Ok(txt_records)
            }
            Err(e) => Err(classify_lookup_failure(name, &e.to_string())),
        }
    }
}

/// Concatenates the character-strings of one TXT record.
pub(crate) fn join_character_strings<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> String {
    parts.into_iter().map(String::from_utf8_lossy).collect()
}

/// Maps a resolver error message to a `LookupError`.
///
/// "no records found" and NXDomain answers are told apart from real failures
/// (timeouts, network errors) so the log says which one happened.
pub(crate) fn classify_lookup_failure(name: &str, message: &str) -> LookupError {
    if message.contains("no records found") || message.contains("NXDomain") {
        LookupError::NoRecords {
            name: name.to_string(),
        }
    } else {
        LookupError::Failed {
            name: name.to_string(),
            reason: message.to_string(),
        }
    }
}
