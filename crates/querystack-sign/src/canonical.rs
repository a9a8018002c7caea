//! Canonical string construction for SignatureVersion 2.
//!
//! The canonical string is the exact byte sequence that is HMAC-signed.
//! It must be byte-identical to what the request encoder later puts on
//! the wire (modulo the appended `Signature` parameter), so both share
//! [`query_encode`].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The set of characters percent-encoded in parameter names and values.
///
/// RFC 3986 unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`)
/// pass through; everything else is encoded. Two details matter for AWS
/// compatibility: space encodes as `%20` (never `+`), and `~` stays bare
/// even though older form encoders escape it.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a parameter name or value for signing and transport.
///
/// # Examples
///
/// ```
/// use querystack_sign::query_encode;
///
/// assert_eq!(query_encode("value2 has spaces"), "value2%20has%20spaces");
/// assert_eq!(query_encode("value3~"), "value3~");
/// assert_eq!(query_encode("a=b/c"), "a%3Db%2Fc");
/// ```
#[must_use]
pub fn query_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// Build the SignatureVersion 2 canonical string.
///
/// Parameters are sorted by key in plain byte-wise ascending order
/// (sorting is internal; callers may pass entries in any order), each
/// `key=value` pair percent-encoded and joined with `&`, then prefixed
/// with the uppercased method, host, and base path separated by literal
/// newlines. No trailing newline.
///
/// # Examples
///
/// ```
/// use querystack_sign::canonical_string;
///
/// let canonical = canonical_string(
///     [("b", "2"), ("a", "1")],
///     "ec2.amazonaws.com",
///     "POST",
///     "/",
/// );
/// assert_eq!(canonical, "POST\nec2.amazonaws.com\n/\na=1&b=2");
/// ```
#[must_use]
pub fn canonical_string<'a>(
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
    host: &str,
    method: &str,
    base_path: &str,
) -> String {
    let mut pairs: Vec<(&str, &str)> = params.into_iter().collect();
    pairs.sort_unstable();

    let encoded = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", query_encode(k), query_encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let method = method.to_ascii_uppercase();
    format!("{method}\n{host}\n{base_path}\n{encoded}")
}
