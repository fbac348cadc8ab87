//! In-memory TXT resolver.

use std::collections::HashMap;

use crate::error_handling::LookupError;

use super::records::TxtResolver;

/// `TxtResolver` answering from a fixed table.
///
/// Names missing from the table answer `LookupError::NoRecords`, the same as
/// an NXDomain from a real resolver.
///
/// # Examples
///
/// ```
/// use dmarc_rua::dns::StaticTxtResolver;
///
/// let resolver = StaticTxtResolver::new()
///     .with_records("_dmarc.example.org", ["v=DMARC1; p=none"])
///     .with_failure("_dmarc.broken.test", "request timed out");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTxtResolver {
    answers: HashMap<String, Result<Vec<String>, String>>,
}

impl StaticTxtResolver {
    /// Creates a resolver with no published names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `records` as the TXT strings of `name`.
    pub fn with_records<I, S>(mut self, name: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = records.into_iter().map(Into::into).collect();
        self.answers.insert(name.to_string(), Ok(records));
        self
    }

    /// Makes lookups of `name` fail with `reason`.
    pub fn with_failure(mut self, name: &str, reason: &str) -> Self {
        self.answers
            .insert(name.to_string(), Err(reason.to_string()));
        self
    }
}

impl TxtResolver for StaticTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        match self.answers.get(name) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(reason)) => Err(LookupError::Failed {
                name: name.to_string(),
                reason: reason.clone(),
            }),
            None => Err(LookupError::NoRecords {
                name: name.to_string(),
            }),
        }
    }
}
