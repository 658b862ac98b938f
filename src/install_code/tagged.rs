//! Tagged install codes: `G$M:<vendor>$A:<address>$I:<key>`
//!
//! Fields are matched greedily, so a `$A:` or `$I:` appearing inside the
//! vendor section shifts the captures to the last occurrence. No field may
//! contain a line terminator; such codes fall through to the positional
//! layout.

use once_cell::sync::Lazy;
use regex::Regex;

use super::RawFields;
use crate::constants::TAGGED_PATTERN;

static TAGGED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TAGGED_PATTERN).expect("tagged install code pattern compiles"));

/// Whether the whole input matches the tagged layout
pub fn matches(input: &str) -> bool {
    TAGGED_RE.is_match(input)
}

/// Capture the address and key fields verbatim
pub fn extract(input: &str) -> Option<RawFields<'_>> {
    let caps = TAGGED_RE.captures(input)?;
    let address = caps.get(1)?.as_str();
    let key = caps.get(2)?.as_str();

    Some(RawFields {
        address: address.as_bytes(),
        key: key.as_bytes(),
    })
}
