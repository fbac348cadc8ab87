//! Single `key=value` tag parsing.

use crate::config::KEY_VALUE_SEPARATOR;
use crate::error_handling::DmarcError;

/// One `key=value` unit of a DMARC record.
///
/// Both halves are trimmed of surrounding whitespace. No case normalization is
/// applied here; the caller lower-cases the whole TXT string beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Text left of the first `=`
    pub key: String,
    /// Text right of the first `=`, may itself contain `=`
    pub value: String,
}

/// Splits one tag token into its key and value.
///
/// The split point is the first `=` in the token, so `"p=reject=strict"`
/// yields key `"p"` and value `"reject=strict"`.
///
/// # Arguments
///
/// * `token` - A single candidate tag, already isolated on `;`
///
/// # Errors
///
/// Returns `DmarcError::MalformedTag` if the token contains no `=` at all.
pub fn parse_tag(token: &str) -> Result<Tag, DmarcError> {
    let (key, value) =
        token
            .split_once(KEY_VALUE_SEPARATOR)
            .ok_or_else(|| DmarcError::MalformedTag {
                token: token.to_string(),
            })?;

    Ok(Tag {
        key: key.trim().to_string(),
        value: value.trim().to_string(),
    })
}
