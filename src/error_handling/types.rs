//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! per-record outcomes counted during a run.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors produced while parsing a DMARC record or its `rua` tag.
///
/// Both variants are contained at the record level: the offending TXT string
/// is skipped and processing continues with the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DmarcError {
    /// A non-empty tag token without any `=` separator.
    #[error("invalid tag: {token}")]
    MalformedTag {
        /// The offending token, trimmed
        token: String,
    },

    /// The `rua` value does not contain exactly one `@`.
    #[error("invalid 'rua' email address: {value}")]
    InvalidAddress {
        /// The full `rua` value
        value: String,
    },
}

/// Errors produced by a TXT lookup.
///
/// Every variant is contained at the domain level.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The name exists in no zone or carries no TXT records.
    #[error("no TXT records found for {name}")]
    NoRecords {
        /// Queried name
        name: String,
    },

    /// Resolver failure (timeout, SERVFAIL, network error, ...).
    #[error("TXT lookup failed for {name}: {reason}")]
    Failed {
        /// Queried name
        name: String,
        /// Resolver error message
        reason: String,
    },
}

/// Outcome of handling one input domain or one of its TXT strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Outcome {
    /// A report domain was written to the output
    Extracted,
    /// The record parsed but carries no `rua` tag
    MissingRua,
    /// The record contained a tag without `=`
    MalformedTag,
    /// The `rua` value did not contain exactly one `@`
    InvalidAddress,
    /// The TXT lookup for the domain failed or returned nothing
    LookupFailed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    /// Human-readable label used in the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Extracted => "Report domain extracted",
            Outcome::MissingRua => "No rua tag",
            Outcome::MalformedTag => "Malformed tag",
            Outcome::InvalidAddress => "Invalid rua address",
            Outcome::LookupFailed => "DNS TXT lookup failed",
        }
    }

    /// `true` for outcomes that are reported at warning level.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::MalformedTag | Outcome::InvalidAddress | Outcome::LookupFailed
        )
    }
}

impl From<&DmarcError> for Outcome {
    fn from(e: &DmarcError) -> Self {
        match e {
            DmarcError::MalformedTag { .. } => Outcome::MalformedTag,
            DmarcError::InvalidAddress { .. } => Outcome::InvalidAddress,
        }
    }
}
