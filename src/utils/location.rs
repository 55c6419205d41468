//! Encoding of stored URLs for the `Location` header.
//!
//! Stored URLs are only required to be non-empty, so they may contain spaces,
//! control characters or non-ASCII text that a header value cannot carry.
//! Those bytes are percent-encoded; URL delimiters and existing `%` escapes
//! pass through untouched.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left as-is: alphanumerics, `-._~` and the reserved URL delimiters.
const LOCATION_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'%')
    .remove(b'#')
    .remove(b'?')
    .remove(b'=')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';');

/// Percent-encodes `url` so it is always a valid header value.
pub fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION_ENCODE_SET).to_string()
}
