//! Percent-encoding of parameter values.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and the RFC 3986 unreserved marks.
const VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode every byte of `value` outside `[A-Za-z0-9-_.~]`, with
/// uppercase hex digits.
pub fn url_encode(value: &str) -> String {
    percent_encode(value.as_bytes(), VALUE_SET).to_string()
}
