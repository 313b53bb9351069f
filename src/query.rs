//! Order-insensitive canonical form of query strings.

use core::cmp::Ordering;

/// Returns the key of a query parameter.
///
/// The key is the part before the first `'='`, or the whole parameter
/// when there is no `'='`.
fn key(param: &str) -> &str {
    param.split_once('=').map_or(param, |(key, _)| key)
}

fn cmp_keys(a: &str, b: &str) -> Ordering {
    key(a).as_bytes().cmp(key(b).as_bytes())
}

/// Reorders the parameters of a query string by key.
///
/// The query is split on `'&'` and the parameters are sorted by their keys,
/// compared byte by byte without case folding or decoding. The sort is stable,
/// so parameters sharing a key keep their relative order. Parameters are
/// never merged or dropped.
///
/// # Examples
///
/// ```
/// use uri_equiv::query::canonicalize_query;
///
/// assert_eq!(canonicalize_query("b=2&a=1"), "a=1&b=2");
/// assert_eq!(canonicalize_query("a=1&b=2&a=3"), "a=1&a=3&b=2");
/// assert_eq!(canonicalize_query("a=3&a=1&b=2"), "a=3&a=1&b=2");
/// ```
#[must_use]
pub fn canonicalize_query(query: &str) -> String {
    let mut buf = String::with_capacity(query.len());
    canonicalize_query_into(&mut buf, query);
    buf
}

/// Reorders the parameters of a query string by key and appends the
/// result to `buf`.
///
/// See [`canonicalize_query`] for details.
pub fn canonicalize_query_into(buf: &mut String, query: &str) {
    let mut params: Vec<&str> = query.split('&').collect();
    // `sort_by` is stable.
    params.sort_by(|a, b| cmp_keys(a, b));

    if let Some((first, rest)) = params.split_first() {
        buf.push_str(first);
        for param in rest {
            buf.push('&');
            buf.push_str(param);
        }
    }
}
