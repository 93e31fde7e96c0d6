//! `application/x-www-form-urlencoded` decoding.
//!
//! Decoding is lenient: it never fails, whatever the request's
//! `Content-Type` says.

/// Split an urlencoded body or query into decoded `(key, value)` pairs.
///
/// Pairs are separated by `&`, `+` stands for a space, and a pair without
/// `=` has an empty value. Blank values are kept. Invalid UTF-8 is replaced
/// rather than rejected.
#[must_use]
pub fn parse_pairs(input: &[u8]) -> Vec<(String, String)> {
    serde_urlencoded::from_bytes(input).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "unable to decode form, treating it as empty");
        Vec::new()
    })
}

/// Decode percent-escapes only, leaving `+` alone.
///
/// Malformed escapes are kept verbatim.
#[must_use]
pub fn decode_percent(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |decoded| decoded.into_owned())
}
