//! Query string parsing for GET form actions.

use percent_encoding::percent_decode_str;

/// Query part of a URL: between the first `?` and the fragment.
#[must_use]
pub fn query_of(url: &str) -> Option<&str> {
    let url = url.split_once('#').map_or(url, |(url, _)| url);
    url.split_once('?').map(|(_, query)| query)
}

/// Parse a query string into ordered `(name, value)` pairs.
///
/// Pairs are separated by `&` or `;`; empty pieces are skipped. Repeated
/// names are kept. A piece without `=` has an empty value. `+` decodes to a
/// space and invalid UTF-8 is replaced.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split(['&', ';'])
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let (name, value) = piece.split_once('=').unwrap_or((piece, ""));
            (decode(name), decode(value))
        })
        .collect()
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}
